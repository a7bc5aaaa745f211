//! Per-scrape settings snapshot.
//!
//! Inline `properties` are fixed at startup. The optional `properties_file`
//! is re-read on every snapshot so enablement can change without a restart;
//! an unreadable or malformed file contributes nothing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sonarprom_core::settings::Properties;

use super::ExporterConfig;

#[derive(Debug, Clone, Default)]
pub struct PropertySource {
    inline: Properties,
    file: Option<PathBuf>,
}

impl PropertySource {
    pub fn new(inline: Properties, file: Option<PathBuf>) -> Self {
        Self { inline, file }
    }

    pub fn from_config(cfg: &ExporterConfig) -> Self {
        Self::new(properties_from_yaml(&cfg.properties), cfg.properties_file.clone())
    }

    pub fn inline(&self) -> &Properties {
        &self.inline
    }

    /// Current settings: inline entries overlaid with the settings file.
    pub async fn snapshot(&self) -> Properties {
        match &self.file {
            Some(path) => self.inline.clone().merged(&read_file(path).await),
            None => self.inline.clone(),
        }
    }
}

async fn read_file(path: &Path) -> Properties {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "properties file unreadable, ignoring"
            );
            return Properties::new();
        }
    };
    match serde_yaml::from_str::<Option<BTreeMap<String, serde_yaml::Value>>>(&raw) {
        Ok(map) => properties_from_yaml(&map.unwrap_or_default()),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "properties file malformed, ignoring"
            );
            Properties::new()
        }
    }
}

/// Flatten YAML scalars to strings; null and nested values are dropped.
pub fn properties_from_yaml(map: &BTreeMap<String, serde_yaml::Value>) -> Properties {
    map.iter()
        .filter_map(|(k, v)| {
            let s = match v {
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::String(s) => s.clone(),
                _ => return None,
            };
            Some((k.clone(), s))
        })
        .collect()
}
