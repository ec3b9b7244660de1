//! Logging settings.

use crate::error::LogResult;
use dlm_options::Options;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPTION_ENABLE_REPORTS: &str = "dlm_enable_reports";
pub const OPTION_IP_TYPE: &str = "dlm_logging_ip_type";
pub const OPTION_UA_LOGGING: &str = "dlm_logging_ua";
pub const OPTION_COUNT_UNIQUE_IPS: &str = "dlm_count_unique_ips";

/// How much of the visitor's IP address is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpLoggingType {
    #[default]
    Full,
    Anonymized,
    Disabled,
}

impl IpLoggingType {
    /// Reads the stored option value. Empty or unknown values mean `full`.
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        match value.trim() {
            "anonymized" => Self::Anonymized,
            "disabled" => Self::Disabled,
            _ => Self::Full,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Anonymized => "anonymized",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for IpLoggingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that decides what a download log entry contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Master switch for download logging.
    pub enabled: bool,
    pub ip_type: IpLoggingType,
    /// Record the visitor's user agent.
    pub ua_logging: bool,
    /// Only count one download per IP and version.
    pub count_unique_ips_only: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ip_type: IpLoggingType::Full,
            ua_logging: true,
            count_unique_ips_only: false,
        }
    }
}

impl LoggingSettings {
    /// Reads the settings from host options, using the defaults above for
    /// anything never set.
    pub fn from_options(options: &dyn Options) -> LogResult<Self> {
        let ip_type = options
            .get_option(OPTION_IP_TYPE)?
            .map(|v| IpLoggingType::from_option_value(&v))
            .unwrap_or_default();

        Ok(Self {
            enabled: options.get_flag(OPTION_ENABLE_REPORTS, true)?,
            ip_type,
            ua_logging: options.get_flag(OPTION_UA_LOGGING, true)?,
            count_unique_ips_only: options.get_flag(OPTION_COUNT_UNIQUE_IPS, false)?,
        })
    }
}
