//! Logging facade used when a download is served.

use crate::error::LogResult;
use crate::log_item::{DownloadStatus, DownloadVersion, LogItem};
use crate::repository::LogItemRepository;
use crate::settings::LoggingSettings;
use crate::visitor::Visitor;
use chrono::Utc;
use dlm_types::{DownloadId, LogItemId, VersionId};
use std::sync::Arc;
use tracing::debug;

/// Records downloads according to the site's logging settings.
pub struct DownloadLogger {
    settings: LoggingSettings,
    repository: Arc<dyn LogItemRepository>,
}

impl DownloadLogger {
    pub fn new(settings: LoggingSettings, repository: Arc<dyn LogItemRepository>) -> Self {
        Self {
            settings,
            repository,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &LoggingSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_logging_enabled(&self) -> bool {
        self.settings.enabled
    }

    #[must_use]
    pub fn is_ua_logging_enabled(&self) -> bool {
        self.settings.ua_logging
    }

    #[must_use]
    pub fn is_count_unique_ips_only(&self) -> bool {
        self.settings.count_unique_ips_only
    }

    /// Logs a download unless logging is off or the visitor already holds
    /// a cookie for it.
    ///
    /// When `set_cookie` is true the cookie is added to the visitor so that
    /// repeated requests in the same session are not counted twice. Returns
    /// the persisted item, if any.
    pub fn log(
        &self,
        visitor: &mut Visitor,
        download: DownloadId,
        version: &DownloadVersion,
        status: DownloadStatus,
        set_cookie: bool,
    ) -> LogResult<Option<LogItem>> {
        if !self.settings.enabled {
            return Ok(None);
        }
        if visitor.has_download_cookie(download) {
            debug!("download {download} already logged for this visitor");
            return Ok(None);
        }

        let mut item = LogItem {
            id: LogItemId::new(),
            user_id: visitor.user_id,
            download_id: download,
            user_ip: visitor.logged_ip(self.settings.ip_type),
            user_uuid: visitor.uuid(self.settings.ip_type),
            user_agent: self
                .settings
                .ua_logging
                .then(|| visitor.user_agent.clone()),
            version_id: version.id,
            version: version.version.clone(),
            download_status: status,
            download_count: 0,
            download_date: Utc::now(),
        };
        item.increase_download_count();

        if set_cookie {
            visitor.set_download_cookie(download);
        }

        self.repository.persist(&item)?;
        debug!("logged download {download} version {}", version.id);
        Ok(Some(item))
    }

    /// Whether the visitor's (policy-adjusted) IP already downloaded this
    /// version. Always false when no IP is recorded.
    pub fn has_ip_downloaded_version(
        &self,
        visitor: &Visitor,
        version: VersionId,
    ) -> LogResult<bool> {
        let Some(ip) = visitor.logged_ip(self.settings.ip_type) else {
            return Ok(false);
        };
        Ok(self.repository.count_by_version_and_ip(version, &ip)? > 0)
    }
}
