//! Projection viewer library
//!
//! Compares three precomputed 2-D projections (t-SNE, PCA, UMAP) of a small
//! set of sentence embeddings, grouped by semantic category.
//!
//! Module organization:
//! - `projection`: dataset, method descriptors, series derivation and the
//!   active-method controller
//! - `render`: Plotly figure, SVG snapshot and interactive page
//! - `config`: view configuration resolved from view properties
//! - `pipeline`: method x format generation shared by the binary and tests

pub mod config;
pub mod pipeline;
pub mod projection;
pub mod render;
