//! Error types for option storage.

use thiserror::Error;

/// Result type for option operations.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors that can occur reading or writing options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Option names must be non-empty.
    #[error("invalid option name: {0:?}")]
    InvalidName(String),

    /// A previous holder of the store lock panicked.
    #[error("option store lock poisoned")]
    Poisoned,
}
