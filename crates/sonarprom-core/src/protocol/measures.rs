//! `GET /api/measures/component` response.

use serde::Deserialize;

/// One raw observation for one project. `value` is absent for
/// period-only (leak) measures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Measure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Measure {
    pub fn new(metric: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            metric: metric.into(),
            value: value.map(str::to_string),
        }
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeasuredComponent {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentMeasuresResponse {
    pub component: MeasuredComponent,
}
