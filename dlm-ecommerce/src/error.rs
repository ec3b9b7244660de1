//! Error types for price formatting.

use thiserror::Error;

/// Result type for formatting setup.
pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("options error: {0}")]
    Options(#[from] dlm_options::OptionsError),

    #[error("unsupported number of decimals: {0}")]
    Decimals(u32),
}
