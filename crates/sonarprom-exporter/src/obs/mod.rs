//! Exported metric state.
//!
//! The registry is owned by the scrape pipeline and rendered by the
//! `/metrics` handler; there is no global default registry.

pub mod registry;

pub use registry::{GaugeSeries, LabelSet, Registry, WriteOutcome, CONTENT_TYPE};
