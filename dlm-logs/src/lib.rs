//! Download event logging for Download Monitor.
//!
//! Decides whether a download is logged and what is recorded about the
//! visitor, then hands the resulting [`LogItem`] to a
//! [`LogItemRepository`] supplied by the host.
//!
//! Privacy settings are read from host options:
//! - `dlm_logging_ip_type`: `full`, `anonymized` or `disabled`
//! - `dlm_logging_ua`: record the user agent (`1`, default) or not
//! - `dlm_count_unique_ips`: count one download per IP and version

mod error;
mod log_item;
mod logger;
mod repository;
mod settings;
mod visitor;

pub use error::{LogError, LogResult};
pub use log_item::{DownloadStatus, DownloadVersion, LogItem};
pub use logger::DownloadLogger;
pub use repository::{LogItemRepository, MemoryLogItemRepository};
pub use settings::{
    IpLoggingType, LoggingSettings, OPTION_COUNT_UNIQUE_IPS, OPTION_ENABLE_REPORTS,
    OPTION_IP_TYPE, OPTION_UA_LOGGING,
};
pub use visitor::{Visitor, anonymize_ip};
