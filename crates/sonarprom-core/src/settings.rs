//! Settings lookup and per-scrape enablement resolution.
//!
//! Every catalog entry is switched on by a boolean property named
//! `prometheus.export.<metric key>`. Missing or unparsable values read as
//! `false`; there is no distinction between "unset" and "disabled".

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::MetricDefinition;

/// Prefix of the per-metric enablement properties.
pub const CONFIG_PREFIX: &str = "prometheus.export.";

/// Category the enablement properties are grouped under.
pub const PROPERTY_CATEGORY: &str = "Prometheus Exporter";

/// Boolean configuration lookup.
pub trait BooleanConfig {
    /// Read `key` as a boolean; absent or malformed values are `false`.
    fn read_bool(&self, key: &str) -> bool;
}

/// Flat string property map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    map: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merged(mut self, other: &Properties) -> Self {
        for (k, v) in &other.map {
            self.map.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl BooleanConfig for Properties {
    fn read_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// Property key that enables `metric_key`.
pub fn enable_key(metric_key: &str) -> String {
    format!("{CONFIG_PREFIX}{metric_key}")
}

/// The subset of the catalog enabled for one scrape, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledMetrics {
    metrics: Vec<&'static MetricDefinition>,
}

impl EnabledMetrics {
    pub fn iter(&self) -> impl Iterator<Item = &'static MetricDefinition> + '_ {
        self.metrics.iter().copied()
    }

    /// Upstream keys to request for every project.
    pub fn keys(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.key).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.metrics.iter().any(|m| m.key == key)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// Resolve which catalog entries are enabled right now.
///
/// Pure function of `config` at call time; callers re-run it on every scrape.
pub fn resolve_enabled(
    catalog: &'static [MetricDefinition],
    config: &dyn BooleanConfig,
) -> EnabledMetrics {
    let metrics = catalog
        .iter()
        .filter(|m| config.read_bool(&enable_key(m.key)))
        .collect();
    EnabledMetrics { metrics }
}

/// Settings-page description of one enablement property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: &'static str,
    pub default_value: bool,
}

/// One property definition per catalog entry.
pub fn property_definitions(catalog: &[MetricDefinition]) -> Vec<PropertyDefinition> {
    catalog
        .iter()
        .map(|m| PropertyDefinition {
            key: enable_key(m.key),
            name: format!("Export \"{}\"", m.name),
            description: format!(
                "Export the \"{}\" metric to Prometheus: {}",
                m.name, m.description
            ),
            category: PROPERTY_CATEGORY,
            default_value: false,
        })
        .collect()
}

/// `prometheus.export.*` keys that do not name a catalog entry.
pub fn unknown_enable_keys<'a>(
    catalog: &[MetricDefinition],
    props: &'a Properties,
) -> Vec<&'a str> {
    props
        .keys()
        .filter(|k| {
            k.strip_prefix(CONFIG_PREFIX)
                .map(|metric| !catalog.iter().any(|m| m.key == metric))
                .unwrap_or(false)
        })
        .collect()
}
