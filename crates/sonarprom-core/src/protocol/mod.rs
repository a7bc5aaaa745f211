//! Wire types for the code-quality server's web API.
//!
//! Only the fields the exporter reads are modelled; unknown fields are
//! ignored so newer server versions keep decoding.

pub mod components;
pub mod measures;

pub use components::{ComponentSearchResponse, Paging, Project, PROJECT_QUALIFIER};
pub use measures::{ComponentMeasuresResponse, Measure, MeasuredComponent};
