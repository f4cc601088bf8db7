use thiserror::Error;

use super::method::Method;

/// Errors raised by the projection view
///
/// Everything here is a configuration defect in trusted static data (or a
/// programmer error such as an unknown method key). None of these are
/// recoverable at runtime.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Method key outside {tsne, pca, umap}
    #[error("Unknown projection method '{0}', expected one of: tsne, pca, umap")]
    UnknownMethod(String),

    /// Output format outside {svg, json, html}
    #[error("Unknown output format '{0}', expected one of: svg, json, html")]
    UnknownFormat(String),

    /// Category label with no entry in the category color map
    #[error("No color defined for category '{0}'")]
    MissingColor(String),

    /// Color value that is not a #RRGGBB hex string
    #[error("Invalid color '{value}' for '{name}'")]
    InvalidColor { name: String, value: String },

    /// Parallel arrays of different lengths
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// Dataset without any sentence
    #[error("Dataset contains no sentences")]
    EmptyDataset,

    /// Method with no descriptor
    #[error("No descriptor defined for method '{0}'")]
    MissingDescriptor(Method),

    /// Malformed embedded data
    #[error("Data error: {0}")]
    Data(String),

    /// Drawing backend failure
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using ProjectionError
pub type Result<T> = std::result::Result<T, ProjectionError>;
