use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use sonarprom_core::error::{Result, SonarPromError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub upstream: UpstreamSection,

    /// Inline settings, e.g. `prometheus.export.bugs: true`.
    #[serde(default)]
    pub properties: BTreeMap<String, serde_yaml::Value>,

    /// Settings file re-read on every scrape; overrides `properties`.
    #[serde(default)]
    pub properties_file: Option<PathBuf>,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SonarPromError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            SonarPromError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    pub base_url: String,

    /// User token, sent as the basic-auth login.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SonarPromError::BadRequest(
                "upstream.base_url must start with http:// or https://".into(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(SonarPromError::BadRequest(format!(
                "upstream.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if !(100..=120000).contains(&self.timeout_ms) {
            return Err(SonarPromError::BadRequest(
                "upstream.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }
}

/// Largest page the components search endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 500;

fn default_listen() -> String {
    "0.0.0.0:9442".into()
}
fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}
fn default_timeout_ms() -> u64 {
    10000
}
