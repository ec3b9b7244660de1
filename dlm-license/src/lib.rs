//! License activation client for Download Monitor add-ons.
//!
//! This crate handles:
//! - The local license record (key, email, activation status)
//! - Activation and deactivation against the vendor license server
//! - Persisting the record through host option storage
//! - The product descriptor that owns a lazily loaded license
//!
//! # Design Principles
//!
//! - **Explicit collaborators**: the HTTP transport and the record store are
//!   passed to [`LicenseClient::new`], never looked up globally
//! - **Failures are data**: `activate` and `deactivate` always return an
//!   [`Outcome`]; no error escapes the client
//! - **One request per call**: no retries, the caller decides
//!
//! # Status transitions
//!
//! `inactive | inactivate -> active` on successful activation,
//! any status `-> inactivate` on a failed activation,
//! `active -> inactive` on successful deactivation.

mod client;
mod config;
mod error;
mod outcome;
mod product;
mod record;
mod store;
mod transport;

pub use client::{ACTIVATED_MESSAGE, LicenseClient};
pub use config::{
    DEFAULT_STORE_URL, ENDPOINT_ACTIVATION, ENDPOINT_UPDATE, LicenseServerConfig,
};
pub use error::{CONNECTION_FAILED_MESSAGE, LicenseError, LicenseField, LicenseResult};
pub use outcome::{Outcome, OutcomeResult};
pub use product::Product;
pub use record::{LicenseRecord, LicenseStatus};
pub use store::{LicenseStore, MemoryLicenseStore, OptionLicenseStore, license_option_name};
pub use transport::{HttpTransport, LicenseTransport, TransportResponse};
