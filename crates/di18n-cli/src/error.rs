//! Error types for di18n-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from di18n-engine
    #[error(transparent)]
    Engine(#[from] di18n_engine::Error),

    /// Error from di18n-template
    #[error(transparent)]
    Template(#[from] di18n_template::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// File watcher error
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
