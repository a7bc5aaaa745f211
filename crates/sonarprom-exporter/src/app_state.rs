//! Shared application state for the exporter.
//!
//! Owns the scrape pipeline (and through it the registry) plus the draining
//! flag flipped on shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sonarprom_core::catalog::CATALOG;
use sonarprom_core::error::Result;
use sonarprom_core::settings::unknown_enable_keys;

use crate::config::{ExporterConfig, PropertySource};
use crate::scrape::Scraper;
use crate::upstream::{HttpUpstream, UpstreamClient};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    scraper: Arc<Scraper>,
}

struct AppStateInner {
    draining: AtomicBool,
}

impl AppState {
    /// Build application state with the HTTP upstream client.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &ExporterConfig) -> Result<Self> {
        let upstream = Arc::new(HttpUpstream::new(&cfg.upstream)?);
        tracing::info!(base_url = %upstream.base_url(), "upstream configured");
        Ok(Self::with_upstream(cfg, upstream))
    }

    /// Build application state around any upstream client.
    pub fn with_upstream(cfg: &ExporterConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        let settings = PropertySource::from_config(cfg);

        for key in unknown_enable_keys(CATALOG, settings.inline()) {
            tracing::warn!(property = %key, "export property names no supported metric");
        }

        let scraper = Arc::new(Scraper::new(settings, upstream));
        Self {
            inner: Arc::new(AppStateInner {
                draining: AtomicBool::new(false),
            }),
            scraper,
        }
    }

    pub fn scraper(&self) -> Arc<Scraper> {
        Arc::clone(&self.scraper)
    }

    /// Mark draining state.
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
