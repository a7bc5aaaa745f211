//! `GET /api/components/search` response.

use serde::Deserialize;

/// Component qualifier for top-level projects.
pub const PROJECT_QUALIFIER: &str = "TRK";

/// A project as listed by the upstream server. Identity is `key`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub key: String,
    pub name: String,
}

impl Project {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_index: u32,
    pub page_size: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSearchResponse {
    #[serde(default)]
    pub paging: Option<Paging>,
    #[serde(default)]
    pub components: Vec<Project>,
}

impl ComponentSearchResponse {
    /// True when the server reports more projects than this page carried.
    pub fn is_truncated(&self) -> bool {
        self.paging
            .as_ref()
            .map(|p| p.total > self.components.len() as u64)
            .unwrap_or(false)
    }
}
