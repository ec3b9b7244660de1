//! Error types for download logging.

use thiserror::Error;

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur while logging downloads.
#[derive(Debug, Error)]
pub enum LogError {
    /// Reading logging settings failed.
    #[error("options error: {0}")]
    Options(#[from] dlm_options::OptionsError),

    /// The repository could not persist or query log items.
    #[error("log storage error: {0}")]
    Storage(String),
}
