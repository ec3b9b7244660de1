//! Persistence seam for log items.

use crate::error::{LogError, LogResult};
use crate::log_item::LogItem;
use dlm_types::VersionId;
use std::sync::RwLock;

/// Stores log items on behalf of the logger.
pub trait LogItemRepository: Send + Sync {
    fn persist(&self, item: &LogItem) -> LogResult<()>;

    /// Number of items for `version` recorded from `ip`.
    fn count_by_version_and_ip(&self, version: VersionId, ip: &str) -> LogResult<u64>;
}

/// Log items kept in memory.
#[derive(Debug, Default)]
pub struct MemoryLogItemRepository {
    items: RwLock<Vec<LogItem>>,
}

impl MemoryLogItemRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything persisted so far, oldest first.
    pub fn items(&self) -> LogResult<Vec<LogItem>> {
        let items = self
            .items
            .read()
            .map_err(|_| LogError::Storage("log repository lock poisoned".into()))?;
        Ok(items.clone())
    }
}

impl LogItemRepository for MemoryLogItemRepository {
    fn persist(&self, item: &LogItem) -> LogResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| LogError::Storage("log repository lock poisoned".into()))?;
        items.push(item.clone());
        Ok(())
    }

    fn count_by_version_and_ip(&self, version: VersionId, ip: &str) -> LogResult<u64> {
        let items = self
            .items
            .read()
            .map_err(|_| LogError::Storage("log repository lock poisoned".into()))?;
        Ok(items
            .iter()
            .filter(|item| item.version_id == version && item.user_ip.as_deref() == Some(ip))
            .count() as u64)
    }
}
