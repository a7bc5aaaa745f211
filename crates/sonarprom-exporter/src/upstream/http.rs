use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use sonarprom_core::error::{Result, SonarPromError};
use sonarprom_core::protocol::{
    ComponentMeasuresResponse, ComponentSearchResponse, Measure, Project, PROJECT_QUALIFIER,
};

use super::UpstreamClient;
use crate::config::UpstreamSection;

const USER_AGENT: &str = concat!("sonarprom/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed upstream client.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    page_size: u32,
}

impl HttpUpstream {
    pub fn new(cfg: &UpstreamSection) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| SonarPromError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
            page_size: cfg.page_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.basic_auth(token, None::<&str>);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SonarPromError::Upstream(format!("GET {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SonarPromError::Upstream(format!("GET {path} returned {status}")));
        }

        resp.json::<T>()
            .await
            .map_err(|e| SonarPromError::Upstream(format!("GET {path} invalid body: {e}")))
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let ps = self.page_size.to_string();
        let resp: ComponentSearchResponse = self
            .get_json(
                "/api/components/search",
                &[("qualifiers", PROJECT_QUALIFIER), ("ps", ps.as_str())],
            )
            .await?;

        if resp.is_truncated() {
            tracing::warn!(
                page_size = self.page_size,
                total = resp.paging.as_ref().map(|p| p.total).unwrap_or_default(),
                "project listing truncated to one page"
            );
        }
        Ok(resp.components)
    }

    async fn fetch_measures(
        &self,
        project_key: &str,
        metric_keys: &[&str],
    ) -> Result<Vec<Measure>> {
        let keys = metric_keys.join(",");
        let resp: ComponentMeasuresResponse = self
            .get_json(
                "/api/measures/component",
                &[("component", project_key), ("metricKeys", keys.as_str())],
            )
            .await?;
        Ok(resp.component.measures)
    }
}
