//! Upstream wire-type vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sonarprom_core::protocol::{ComponentMeasuresResponse, ComponentSearchResponse, Project};

mod vector_loader;
use vector_loader::load;

#[test]
fn parse_component_search() {
    let resp: ComponentSearchResponse = load("components_search.json");
    assert_eq!(resp.components.len(), 2);
    assert_eq!(resp.components[0], Project::new("p1", "Proj One"));
    assert_eq!(resp.components[1].name, "Proj \"Two\"");
    assert_eq!(resp.paging.as_ref().unwrap().page_size, 500);
    assert!(!resp.is_truncated());
}

#[test]
fn detect_truncated_listing() {
    let resp: ComponentSearchResponse = load("components_search_truncated.json");
    assert_eq!(resp.components.len(), 1);
    assert!(resp.is_truncated());
}

#[test]
fn parse_component_measures() {
    let resp: ComponentMeasuresResponse = load("measures_component.json");
    assert_eq!(resp.component.key, "p1");
    let measures = &resp.component.measures;
    assert_eq!(measures.len(), 4);
    assert_eq!(measures[0].metric, "bugs");
    assert_eq!(measures[0].raw_value(), Some("15"));
    assert_eq!(measures[2].raw_value(), Some("WARN"));
}

#[test]
fn period_only_measure_has_no_value() {
    let resp: ComponentMeasuresResponse = load("measures_component.json");
    let new_bugs = resp
        .component
        .measures
        .iter()
        .find(|m| m.metric == "new_bugs")
        .unwrap();
    assert!(new_bugs.raw_value().is_none());
}

#[test]
fn component_without_measures() {
    let resp: ComponentMeasuresResponse = load("measures_empty.json");
    assert_eq!(resp.component.key, "p9");
    assert!(resp.component.name.is_none());
    assert!(resp.component.measures.is_empty());
}
