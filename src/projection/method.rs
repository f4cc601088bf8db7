//! Projection method keys
//!
//! The set of methods is closed: every coordinate set, descriptor and selector
//! control is keyed by one of these three values.

use super::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensionality reduction method whose precomputed projection is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// t-Distributed Stochastic Neighbor Embedding
    #[default]
    Tsne,
    /// Principal Component Analysis
    Pca,
    /// Uniform Manifold Approximation and Projection
    Umap,
}

impl Method {
    /// All methods in selector order
    pub const ALL: [Method; 3] = [Method::Tsne, Method::Pca, Method::Umap];

    /// Stable key used in data files, CLI flags and output file names
    pub fn key(self) -> &'static str {
        match self {
            Method::Tsne => "tsne",
            Method::Pca => "pca",
            Method::Umap => "umap",
        }
    }

    /// Position in `Method::ALL`, used to index per-method arrays
    pub fn index(self) -> usize {
        match self {
            Method::Tsne => 0,
            Method::Pca => 1,
            Method::Umap => 2,
        }
    }

    /// Parse a method key
    ///
    /// ASCII case is ignored, anything else must match exactly. Unknown keys
    /// are rejected rather than mapped to a default method.
    pub fn parse(key: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ProjectionError::UnknownMethod(key.to_string()))
    }
}

impl FromStr for Method {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        Method::parse(s)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
