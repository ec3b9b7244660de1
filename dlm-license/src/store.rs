//! Persistence of license records.

use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseRecord;
use dlm_options::Options;
use dlm_types::ProductId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Loads and saves license records, keyed by product id.
pub trait LicenseStore: Send + Sync {
    /// Returns the stored record, or `None` if the product has none yet.
    fn load(&self, product_id: &ProductId) -> LicenseResult<Option<LicenseRecord>>;

    /// Writes the record, replacing any previous one.
    fn save(&self, record: &LicenseRecord) -> LicenseResult<()>;
}

/// Option name under which a product's license is stored.
#[must_use]
pub fn license_option_name(product_id: &ProductId) -> String {
    format!("{product_id}-license")
}

/// Stores each record as JSON in a host option.
pub struct OptionLicenseStore {
    options: Arc<dyn Options>,
}

impl OptionLicenseStore {
    pub fn new(options: Arc<dyn Options>) -> Self {
        Self { options }
    }
}

impl LicenseStore for OptionLicenseStore {
    fn load(&self, product_id: &ProductId) -> LicenseResult<Option<LicenseRecord>> {
        let Some(raw) = self.options.get_option(&license_option_name(product_id))? else {
            return Ok(None);
        };
        let record: LicenseRecord = serde_json::from_str(&raw)?;
        if record.product_id() != product_id {
            return Err(LicenseError::Storage(format!(
                "record stored for {product_id} belongs to {}",
                record.product_id()
            )));
        }
        Ok(Some(record))
    }

    fn save(&self, record: &LicenseRecord) -> LicenseResult<()> {
        let raw = serde_json::to_string(record)?;
        self.options
            .update_option(&license_option_name(record.product_id()), &raw)?;
        Ok(())
    }
}

/// Records held in memory. Counts saves so callers can check persistence.
#[derive(Debug, Default)]
pub struct MemoryLicenseStore {
    records: RwLock<HashMap<ProductId, LicenseRecord>>,
    saves: AtomicUsize,
}

impl MemoryLicenseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl LicenseStore for MemoryLicenseStore {
    fn load(&self, product_id: &ProductId) -> LicenseResult<Option<LicenseRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| LicenseError::Storage("license store lock poisoned".into()))?;
        Ok(records.get(product_id).cloned())
    }

    fn save(&self, record: &LicenseRecord) -> LicenseResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| LicenseError::Storage("license store lock poisoned".into()))?;
        records.insert(record.product_id().clone(), record.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
