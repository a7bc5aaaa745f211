//! sonarprom exporter library entry.
//!
//! Wires config, the upstream client, the scrape pipeline, and the exported
//! registry into an axum service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scrape;
pub mod upstream;
