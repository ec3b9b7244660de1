//! Core type definitions for Download Monitor.
//!
//! This crate defines the identifiers shared by the licensing, logging and
//! ecommerce crates:
//! - Product identifiers for paid add-ons
//! - Numeric host identifiers (downloads, versions, users)
//! - Time-ordered log item identifiers (UUID v7)
//! - The site instance reported to the license server

mod ids;
mod instance;

pub use ids::{DownloadId, LogItemId, ProductId, UserId, VersionId};
pub use instance::SiteInstance;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid product id: {0:?}")]
    InvalidProductId(String),

    #[error("invalid site instance: {0:?}")]
    InvalidInstance(String),
}
