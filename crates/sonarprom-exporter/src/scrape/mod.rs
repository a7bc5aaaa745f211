//! Scrape pipeline: enablement -> reconciliation -> translation -> render.
//!
//! The whole cycle runs under one lock. Reconciliation clears the registry
//! before rebuilding it, so interleaving two scrapes would expose a half
//! rebuilt registry to the second one.

pub mod translator;

use std::sync::Arc;

use tokio::sync::Mutex;

use sonarprom_core::catalog::{MetricDefinition, CATALOG};
use sonarprom_core::error::Result;
use sonarprom_core::settings::resolve_enabled;

use crate::config::PropertySource;
use crate::obs::Registry;
use crate::upstream::UpstreamClient;

pub use translator::{translate_measures, TranslateStats};

pub struct Scraper {
    catalog: &'static [MetricDefinition],
    settings: PropertySource,
    upstream: Arc<dyn UpstreamClient>,
    registry: Mutex<Registry>,
}

impl Scraper {
    pub fn new(settings: PropertySource, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self::with_catalog(CATALOG, settings, upstream)
    }

    pub fn with_catalog(
        catalog: &'static [MetricDefinition],
        settings: PropertySource,
        upstream: Arc<dyn UpstreamClient>,
    ) -> Self {
        Self {
            catalog,
            settings,
            upstream,
            registry: Mutex::new(Registry::new()),
        }
    }

    /// Run one full cycle and return the exposition body.
    ///
    /// Upstream failures abort the scrape; the registry is rebuilt on the
    /// next call anyway.
    pub async fn scrape(&self) -> Result<String> {
        let mut registry = self.registry.lock().await;

        let props = self.settings.snapshot().await;
        let enabled = resolve_enabled(self.catalog, &props);
        registry.rebuild(&enabled);

        if enabled.is_empty() {
            tracing::debug!("no metrics enabled, skipping upstream");
            return Ok(registry.render());
        }

        let keys = enabled.keys();
        let projects = self.upstream.list_projects().await?;

        let mut stats = TranslateStats::default();
        for project in &projects {
            let measures = self.upstream.fetch_measures(&project.key, &keys).await?;
            stats += translate_measures(&mut registry, project, &measures);
        }

        tracing::debug!(
            enabled = enabled.len(),
            projects = projects.len(),
            written = stats.written,
            dynamic = stats.dynamic,
            rejected = stats.rejected,
            "scrape complete"
        );

        Ok(registry.render())
    }
}
