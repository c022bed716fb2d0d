//! Error types for di18n-engine

use std::path::{Path, PathBuf};

/// Result type for di18n-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in di18n-engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template walk or serialization error
    #[error(transparent)]
    Template(#[from] di18n_template::Error),

    /// Invalid template JSON
    #[error("Invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Language tag unusable as a flat output filename
    #[error("Invalid language tag {tag:?}: must not contain path separators")]
    InvalidTag { tag: String },

    /// I/O failure with the path it happened on
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Attach a path to an I/O error
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
