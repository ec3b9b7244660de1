//! Download log entries.

use chrono::{DateTime, Utc};
use dlm_types::{DownloadId, LogItemId, UserId, VersionId};
use serde::{Deserialize, Serialize};

/// How a download request ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    #[default]
    Completed,
    Redirected,
    Failed,
}

/// The version of a download being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadVersion {
    pub id: VersionId,
    /// Version label shown to users (e.g. `1.2.0`).
    pub version: String,
}

impl DownloadVersion {
    #[must_use]
    pub fn new(id: VersionId, version: &str) -> Self {
        Self {
            id,
            version: version.to_string(),
        }
    }
}

/// One logged download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogItem {
    pub id: LogItemId,
    pub user_id: UserId,
    pub download_id: DownloadId,
    /// IP as allowed by the IP logging policy.
    pub user_ip: Option<String>,
    pub user_uuid: Option<String>,
    pub user_agent: Option<String>,
    pub version_id: VersionId,
    pub version: String,
    pub download_status: DownloadStatus,
    pub download_count: u32,
    pub download_date: DateTime<Utc>,
}

impl LogItem {
    pub fn increase_download_count(&mut self) {
        self.download_count += 1;
    }
}
