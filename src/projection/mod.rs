//! Projection view module
//!
//! Everything needed to turn the static sentence dataset into render-ready
//! series for one projection method at a time.
//!
//! Structure:
//! - `method.rs`: the closed set of projection methods
//! - `dataset.rs`: embedded sentences, categories and coordinates
//! - `colors.rs`: category → RGB lookup and hex helpers
//! - `descriptors.rs`: display name, description and insights per method
//! - `series.rs`: pure grouping of one projection into per-category series
//! - `controller.rs`: the active-method selection
//! - `view_properties.rs`: view.json property registry and override reader
//! - `error.rs`: error types

pub mod colors;
pub mod controller;
pub mod dataset;
pub mod descriptors;
pub mod error;
pub mod method;
pub mod series;
pub mod view_properties;

// Re-exports for convenience
pub use colors::{parse_hex_color, to_hex, CategoryColorMap, Rgb};
pub use controller::ProjectionView;
pub use dataset::{Dataset, Projection};
pub use descriptors::{DescriptorRegistry, MethodDescriptor};
pub use error::{ProjectionError, Result};
pub use method::Method;
pub use series::{compute_series, display_name, MarkerStyle, MarkerSymbol, Series};
pub use view_properties::{PropertyReader, PropertyRegistry};
