//! sonarprom core: metric catalog, enablement, and value translation.
//!
//! This crate holds the pieces of the exporter that decide *what* gets
//! published and *how* a raw upstream measurement becomes a sample. It
//! carries no HTTP or runtime dependencies so the rules can be exercised
//! without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed upstream values degrade to documented defaults instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod protocol;
pub mod settings;
pub mod translate;

/// Shared result type.
pub use error::{Result, SonarPromError};
