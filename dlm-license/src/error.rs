//! Error types for the licensing module.

use std::fmt;
use thiserror::Error;

/// Message shown for every transport-level failure.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Connection failed to the License Key API server. Try again later.";

/// Record fields checked before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseField {
    Key,
    Email,
}

impl fmt::Display for LicenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("license key"),
            Self::Email => f.write_str("email"),
        }
    }
}

/// Licensing-specific errors.
///
/// The `Display` output of each variant is the message handed back to the
/// user in a failed [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
pub enum LicenseError {
    /// A required record field is empty. No request was made.
    #[error("{message}")]
    Validation { field: LicenseField, message: String },

    /// The request did not complete, returned a non-200 status, or the body
    /// could not be decoded.
    #[error("{}", CONNECTION_FAILED_MESSAGE)]
    Transport { detail: String },

    /// The license server explicitly rejected the request.
    #[error("{message}")]
    Server { code: String, message: String },

    /// The server answered 200 with a body that neither confirms activation
    /// nor carries an error code.
    #[error("unexpected response from the License Key API server")]
    UnexpectedResponse,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LicenseError {
    pub(crate) fn validation(field: LicenseField, message: &str) -> Self {
        Self::Validation {
            field,
            message: message.to_string(),
        }
    }

    pub(crate) fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Returns the missing field for validation failures.
    #[must_use]
    pub fn missing_field(&self) -> Option<LicenseField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<dlm_options::OptionsError> for LicenseError {
    fn from(err: dlm_options::OptionsError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
