//! Error types for di18n-template

/// Result type for di18n-template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking or serializing a template
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template nesting is deeper than the supported bound
    #[error("Template nesting exceeds {max} levels")]
    DepthExceeded { max: usize },

    /// The template root was not a JSON object
    #[error("Template root must be a JSON object")]
    RootNotObject,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
