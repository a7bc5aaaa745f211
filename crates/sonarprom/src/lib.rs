//! Top-level facade crate for sonarprom.
//!
//! Re-exports the core translation types and the exporter service so users
//! can depend on a single crate.

pub mod core {
    pub use sonarprom_core::*;
}

pub mod exporter {
    pub use sonarprom_exporter::*;
}
