//! Raw measurement -> numeric sample translation.
//!
//! Upstream values arrive as loosely typed strings. Numeric metrics are
//! parsed as floats; the quality gate status is an enumeration. Nothing
//! here fails: unparsable input degrades to [`DEFAULT_VALUE`].

use crate::catalog::ALERT_STATUS_KEY;

/// Value written when a raw measurement cannot be interpreted.
pub const DEFAULT_VALUE: f64 = 0.0;

/// Severity dimension inferred from a metric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
    /// No severity qualifier: the metric's grand total.
    All,
}

impl Severity {
    /// Label value used in the exposition output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Blocker => "BLOCKER",
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
            Severity::All => "ALL",
        }
    }
}

// Checked in order; the first match wins.
const SEVERITY_MARKERS: [(&str, Severity); 5] = [
    ("blocker", Severity::Blocker),
    ("critical", Severity::Critical),
    ("major", Severity::Major),
    ("minor", Severity::Minor),
    ("info", Severity::Info),
];

/// Infer the severity label from a metric key (case-insensitive substring).
pub fn infer_severity(metric_key: &str) -> Severity {
    let lower = metric_key.to_ascii_lowercase();
    SEVERITY_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, sev)| *sev)
        .unwrap_or(Severity::All)
}

/// Map a quality gate status to its numeric code.
///
/// `OK` -> 1, `WARN` -> 2, `ERROR` -> 3, anything else (or missing) -> 0.
pub fn alert_status_value(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_VALUE;
    };
    match raw.trim().to_ascii_uppercase().as_str() {
        "OK" => 1.0,
        "WARN" => 2.0,
        "ERROR" => 3.0,
        _ => DEFAULT_VALUE,
    }
}

// Only these spellings name a special value; `inf`, `nan` and friends do not.
const SPECIAL_FLOATS: [&str; 2] = ["Infinity", "NaN"];

fn is_number_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    match body.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => SPECIAL_FLOATS.contains(&body),
        _ => true,
    }
}

/// Parse a numeric raw value, falling back to [`DEFAULT_VALUE`].
pub fn parse_or_default(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_VALUE;
    };
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if is_number_literal(trimmed) => v,
        _ => {
            tracing::debug!(raw = %raw, "non-numeric measure value, using default");
            DEFAULT_VALUE
        }
    }
}

/// Translate one raw measurement for `metric_key` into a sample value.
pub fn sample_value(metric_key: &str, raw: Option<&str>) -> f64 {
    if metric_key == ALERT_STATUS_KEY {
        alert_status_value(raw)
    } else {
        parse_or_default(raw)
    }
}
