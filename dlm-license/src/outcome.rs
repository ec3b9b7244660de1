//! Result values returned by activate and deactivate.

use crate::error::LicenseError;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The `result` tag of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeResult {
    Success,
    Failed,
}

impl OutcomeResult {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Outcome of a license operation.
///
/// Serializes to `{"result": "success" | "failed", "message": "..."}`, the
/// shape the admin screen consumes. `message` is omitted when absent.
#[derive(Debug)]
pub enum Outcome {
    Success { message: Option<String> },
    Failed { error: LicenseError },
}

impl Outcome {
    pub(crate) fn success(message: Option<&str>) -> Self {
        Self::Success {
            message: message.map(str::to_string),
        }
    }

    pub(crate) fn failed(error: LicenseError) -> Self {
        Self::Failed { error }
    }

    #[must_use]
    pub fn result(&self) -> OutcomeResult {
        match self {
            Self::Success { .. } => OutcomeResult::Success,
            Self::Failed { .. } => OutcomeResult::Failed,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The human-readable message, if any. Failures always carry one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success { message } => message.clone(),
            Self::Failed { error } => Some(error.to_string()),
        }
    }

    /// The underlying error of a failed outcome.
    #[must_use]
    pub fn error(&self) -> Option<&LicenseError> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<Option<String>, LicenseError> {
        match self {
            Self::Success { message } => Ok(message),
            Self::Failed { error } => Err(error),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let message = self.message();
        let len = if message.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Outcome", len)?;
        state.serialize_field("result", self.result().as_str())?;
        match message {
            Some(message) => state.serialize_field("message", &message)?,
            None => state.skip_field("message")?,
        }
        state.end()
    }
}
