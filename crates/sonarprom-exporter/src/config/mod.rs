//! Exporter config loader (strict parsing).

pub mod properties;
pub mod schema;

use std::fs;

use sonarprom_core::error::{Result, SonarPromError};

pub use properties::PropertySource;
pub use schema::{ExporterConfig, ServerSection, UpstreamSection};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "SONARPROM_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "sonarprom.yaml";

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SonarPromError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| SonarPromError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
