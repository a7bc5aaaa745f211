//! Exported gauge registry.
//!
//! One [`GaugeSeries`] per metric key, each holding values keyed by the
//! `(key, name, severity)` label tuple. The registry is rebuilt from scratch
//! at the start of every scrape, so series for metrics switched off between
//! scrapes never linger. Rendering follows the Prometheus text exposition
//! format (version 0.0.4).

use std::collections::BTreeMap;
use std::fmt::Write;

use sonarprom_core::catalog;
use sonarprom_core::settings::EnabledMetrics;
use sonarprom_core::translate::Severity;

/// Content type of [`Registry::render`] output.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Label names, in exposition order.
pub const LABEL_NAMES: [&str; 3] = ["key", "name", "severity"];

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf".into() } else { "-Inf".into() }
    } else {
        format!("{v}")
    }
}

/// Label tuple of one sample.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelSet {
    pub project_key: String,
    pub project_name: String,
    pub severity: Severity,
}

impl LabelSet {
    pub fn new(project_key: &str, project_name: &str, severity: Severity) -> Self {
        Self {
            project_key: project_key.to_string(),
            project_name: project_name.to_string(),
            severity,
        }
    }

    fn values(&self) -> [&str; 3] {
        [self.project_key.as_str(), self.project_name.as_str(), self.severity.as_str()]
    }
}

/// One gauge family.
#[derive(Debug, Clone)]
pub struct GaugeSeries {
    name: String,
    help: String,
    samples: BTreeMap<LabelSet, f64>,
}

impl GaugeSeries {
    pub fn new(name: String, help: String) -> Self {
        Self {
            name,
            help,
            samples: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Set the value for `labels`; later writes win.
    pub fn set(&mut self, labels: LabelSet, v: f64) {
        self.samples.insert(labels, v);
    }

    pub fn get(&self, labels: &LabelSet) -> Option<f64> {
        self.samples.get(labels).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help));
        let _ = writeln!(out, "# TYPE {} gauge", self.name);
        for (labels, v) in &self.samples {
            let label_str = LABEL_NAMES
                .iter()
                .zip(labels.values())
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", self.name, label_str, format_value(*v));
        }
    }
}

/// Outcome of [`Registry::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Written into a series declared during reconciliation (or earlier this scrape).
    Declared,
    /// A series was created on the fly for an uncatalogued key.
    Dynamic,
    /// The key cannot form a legal metric name; nothing written.
    Rejected,
}

/// All gauge families of the current scrape, keyed by upstream metric key.
#[derive(Debug, Default)]
pub struct Registry {
    series: BTreeMap<String, GaugeSeries>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every series.
    pub fn reset(&mut self) {
        self.series.clear();
    }

    /// Declare an empty series for `key` unless one exists.
    pub fn declare(&mut self, key: &str, help: &str) {
        self.series
            .entry(key.to_string())
            .or_insert_with(|| GaugeSeries::new(catalog::metric_name(key), help.to_string()));
    }

    /// Reset, then declare exactly the enabled metrics.
    pub fn rebuild(&mut self, enabled: &EnabledMetrics) {
        self.reset();
        for m in enabled.iter() {
            self.declare(m.key, m.description);
        }
    }

    /// Write one sample, creating a series for `key` if none exists yet.
    pub fn write(&mut self, key: &str, labels: LabelSet, v: f64) -> WriteOutcome {
        if let Some(series) = self.series.get_mut(key) {
            series.set(labels, v);
            return WriteOutcome::Declared;
        }

        let name = catalog::metric_name(key);
        if !catalog::is_valid_metric_name(&name) {
            tracing::warn!(
                metric = %key,
                "metric key is not a valid exported name, sample skipped"
            );
            return WriteOutcome::Rejected;
        }

        tracing::debug!(metric = %key, "registering series for uncatalogued metric");
        let mut series = GaugeSeries::new(name, catalog::dynamic_help(key));
        series.set(labels, v);
        self.series.insert(key.to_string(), series);
        WriteOutcome::Dynamic
    }

    pub fn series(&self, key: &str) -> Option<&GaugeSeries> {
        self.series.get(key)
    }

    pub fn get(&self, key: &str, labels: &LabelSet) -> Option<f64> {
        self.series.get(key).and_then(|s| s.get(labels))
    }

    /// Metric keys with a series, in render order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all series.
    pub fn sample_count(&self) -> usize {
        self.series.values().map(GaugeSeries::len).sum()
    }

    /// Render every series. An empty registry renders an empty body.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for series in self.series.values() {
            series.render(&mut out);
        }
        out
    }
}
