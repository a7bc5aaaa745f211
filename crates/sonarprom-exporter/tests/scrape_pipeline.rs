//! End-to-end scrape cycles against an in-memory upstream.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use sonarprom_core::protocol::{Measure, Project};
use sonarprom_core::settings::Properties;
use sonarprom_exporter::config::PropertySource;
use sonarprom_exporter::obs::{LabelSet, Registry};
use sonarprom_exporter::scrape::{translate_measures, Scraper, TranslateStats};
use sonarprom_core::translate::Severity;

use fake_upstream::FakeUpstream;

fn settings(enabled: &[&str]) -> PropertySource {
    let props: Properties = enabled
        .iter()
        .map(|k| (format!("prometheus.export.{k}"), "true".to_string()))
        .collect();
    PropertySource::new(props, None)
}

#[tokio::test]
async fn bugs_scenario() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .measure("p1", "bugs", Some("15")),
    );
    let scraper = Scraper::new(settings(&["bugs"]), upstream.clone());

    let body = scraper.scrape().await.unwrap();
    assert!(body.contains("sonarqube_bugs{key=\"p1\",name=\"Proj One\",severity=\"ALL\"} 15\n"));

    let requested = upstream.requested.lock().unwrap().clone();
    assert_eq!(requested, vec![("p1".to_string(), vec!["bugs".to_string()])]);
}

#[tokio::test]
async fn alert_status_scenario() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .project("p2", "Proj Two")
            .measure("p1", "alert_status", Some("WARN"))
            .measure("p2", "alert_status", Some("ERROR")),
    );
    let scraper = Scraper::new(settings(&["alert_status"]), upstream);

    let body = scraper.scrape().await.unwrap();
    assert!(body.contains(
        "sonarqube_alert_status{key=\"p1\",name=\"Proj One\",severity=\"ALL\"} 2\n"
    ));
    assert!(body.contains(
        "sonarqube_alert_status{key=\"p2\",name=\"Proj Two\",severity=\"ALL\"} 3\n"
    ));
}

#[tokio::test]
async fn nothing_enabled_skips_upstream() {
    let upstream = Arc::new(FakeUpstream::new().project("p1", "Proj One"));
    let scraper = Scraper::new(settings(&[]), upstream.clone());

    let body = scraper.scrape().await.unwrap();
    assert_eq!(body, "");
    assert_eq!(upstream.list_calls(), 0);
}

#[tokio::test]
async fn uncatalogued_key_gets_dynamic_series() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .measure("p1", "violations", Some("9"))
            .measure("p1", "blocker_violations", Some("4")),
    );
    let scraper = Scraper::new(settings(&["violations"]), upstream);

    let body = scraper.scrape().await.unwrap();
    assert!(body.contains(
        "# HELP sonarqube_blocker_violations Metric exported from Sonar: blocker_violations\n"
    ));
    assert!(body.contains(
        "sonarqube_blocker_violations{key=\"p1\",name=\"Proj One\",severity=\"BLOCKER\"} 4\n"
    ));
    assert!(body.contains(
        "sonarqube_violations{key=\"p1\",name=\"Proj One\",severity=\"ALL\"} 9\n"
    ));
}

#[tokio::test]
async fn non_numeric_value_defaults_to_zero() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .measure("p1", "bugs", Some("lots"))
            .measure("p1", "coverage", None),
    );
    let scraper = Scraper::new(settings(&["bugs", "coverage"]), upstream);

    let body = scraper.scrape().await.unwrap();
    assert!(body.contains("sonarqube_bugs{key=\"p1\",name=\"Proj One\",severity=\"ALL\"} 0\n"));
    assert!(body.contains("sonarqube_coverage{key=\"p1\",name=\"Proj One\",severity=\"ALL\"} 0\n"));
}

#[tokio::test]
async fn missing_measure_writes_no_sample() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .project("p2", "Proj Two")
            .measure("p1", "coverage", Some("75.5")),
    );
    let scraper = Scraper::new(settings(&["coverage"]), upstream);

    let body = scraper.scrape().await.unwrap();
    assert!(body.contains("key=\"p1\""));
    assert!(!body.contains("key=\"p2\""));
}

#[tokio::test]
async fn upstream_failure_fails_the_scrape() {
    let upstream = Arc::new(FakeUpstream::failing());
    let scraper = Scraper::new(settings(&["bugs"]), upstream);

    let err = scraper.scrape().await.expect_err("listing failure must surface");
    assert_eq!(err.client_code().as_str(), "UPSTREAM");
}

#[tokio::test]
async fn measures_failure_after_earlier_projects_fails_the_scrape() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .project("p2", "Proj Two")
            .measure("p1", "bugs", Some("1"))
            .measure("p2", "bugs", Some("2"))
            .fail_fetch_for("p2"),
    );
    let scraper = Scraper::new(settings(&["bugs"]), upstream.clone());

    let err = scraper.scrape().await.expect_err("fetch failure must surface");
    assert_eq!(err.client_code().as_str(), "UPSTREAM");

    let fetched: Vec<String> = upstream
        .requested
        .lock()
        .unwrap()
        .iter()
        .map(|(project, _)| project.clone())
        .collect();
    assert_eq!(fetched, vec!["p1".to_string(), "p2".to_string()]);
}

#[tokio::test]
async fn state_does_not_accumulate_across_scrapes() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .measure("p1", "bugs", Some("1"))
            .measure("p1", "blocker_violations", Some("2")),
    );
    let scraper = Arc::new(Scraper::new(settings(&["bugs"]), upstream));

    let first = scraper.scrape().await.unwrap();
    let second = scraper.scrape().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_scrapes_see_complete_registries() {
    let upstream = Arc::new(
        FakeUpstream::new()
            .project("p1", "Proj One")
            .project("p2", "Proj Two")
            .measure("p1", "bugs", Some("1"))
            .measure("p2", "bugs", Some("2")),
    );
    let scraper = Arc::new(Scraper::new(settings(&["bugs"]), upstream));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = Arc::clone(&scraper);
            tokio::spawn(async move { s.scrape().await.unwrap() })
        })
        .collect();

    for h in handles {
        let body = h.await.unwrap();
        assert_eq!(body.matches("sonarqube_bugs{").count(), 2);
    }
}

#[test]
fn translator_labels_and_counts() {
    let mut reg = Registry::new();
    let project = Project::new("p1", "Proj One");
    let measures = vec![
        Measure::new("critical_violations", Some("3")),
        Measure::new("bad-key", Some("1")),
        Measure::new("critical_violations", Some("5")),
    ];

    let stats = translate_measures(&mut reg, &project, &measures);
    assert_eq!(
        stats,
        TranslateStats {
            written: 2,
            dynamic: 1,
            rejected: 1
        }
    );
    let labels = LabelSet::new("p1", "Proj One", Severity::Critical);
    assert_eq!(reg.get("critical_violations", &labels), Some(5.0));
}
