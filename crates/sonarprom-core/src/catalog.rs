//! Static catalog of metrics the exporter knows how to publish.
//!
//! Keys are the code-quality server's own metric keys; the exported metric
//! name is always [`METRIC_PREFIX`] followed by the key.

/// Prefix applied to every exported metric name.
pub const METRIC_PREFIX: &str = "sonarqube_";

/// Key of the quality gate status metric (non-numeric upstream value).
pub const ALERT_STATUS_KEY: &str = "alert_status";

/// One supported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricDefinition {
    pub key: &'static str,
    /// Short human label, used for the settings page.
    pub name: &'static str,
    /// Long description, used as `# HELP` text.
    pub description: &'static str,
}

impl MetricDefinition {
    const fn new(key: &'static str, name: &'static str, description: &'static str) -> Self {
        Self { key, name, description }
    }

    /// Exported metric name (`sonarqube_<key>`).
    pub fn metric_name(&self) -> String {
        metric_name(self.key)
    }
}

pub const CATALOG: &[MetricDefinition] = &[
    MetricDefinition::new("bugs", "Bugs", "Bugs"),
    MetricDefinition::new("vulnerabilities", "Vulnerabilities", "Vulnerabilities"),
    MetricDefinition::new("code_smells", "Code Smells", "Code Smells"),
    MetricDefinition::new("coverage", "Coverage", "Coverage by tests"),
    MetricDefinition::new(
        "sqale_index",
        "Technical Debt",
        "Total effort (in minutes) to fix all the issues on the component and therefore to comply to all the requirements.",
    ),
    MetricDefinition::new("complexity", "Cyclomatic Complexity", "Cyclomatic complexity"),
    MetricDefinition::new("lines_to_cover", "Lines to Cover", "Lines to cover"),
    MetricDefinition::new("violations", "Issues", "Issues"),
    MetricDefinition::new(
        ALERT_STATUS_KEY,
        "Quality Gate Status",
        "The project status with regard to its quality gate.",
    ),
    MetricDefinition::new("security_hotspots", "Security Hotspots", "Security Hotspots"),
    MetricDefinition::new("duplicated_lines", "Duplicated Lines", "Duplicated lines"),
    MetricDefinition::new("ncloc", "Lines of Code", "Non commenting lines of code"),
    MetricDefinition::new("lines", "Lines", "Lines"),
];

/// Exported metric name for an arbitrary upstream key.
pub fn metric_name(key: &str) -> String {
    format!("{METRIC_PREFIX}{key}")
}

/// Help text for a key that was not anticipated by the catalog.
pub fn dynamic_help(key: &str) -> String {
    format!("Metric exported from Sonar: {key}")
}

/// Whether `name` is a legal Prometheus metric name (`[a-zA-Z_:][a-zA-Z0-9_:]*`).
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
