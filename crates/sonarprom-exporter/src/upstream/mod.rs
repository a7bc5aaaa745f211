//! Client side of the code-quality server's web API.
//!
//! The scrape pipeline only sees [`UpstreamClient`]; [`HttpUpstream`] is the
//! production implementation. Failures are returned as
//! `SonarPromError::Upstream` and never retried here.

pub mod http;

use async_trait::async_trait;

use sonarprom_core::error::Result;
use sonarprom_core::protocol::{Measure, Project};

pub use http::HttpUpstream;

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// One page of projects (bounded by the configured page size).
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Measures of `project_key` for the requested keys. Keys with no
    /// measure are simply absent from the result.
    async fn fetch_measures(
        &self,
        project_key: &str,
        metric_keys: &[&str],
    ) -> Result<Vec<Measure>>;
}
