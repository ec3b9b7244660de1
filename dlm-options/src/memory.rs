//! In-memory option storage.

use crate::Options;
use crate::error::{OptionsError, OptionsResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Options held in a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryOptions {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryOptions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given options.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    /// Returns true if no option is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Options for MemoryOptions {
    fn get_option(&self, name: &str) -> OptionsResult<Option<String>> {
        let values = self.values.read().map_err(|_| OptionsError::Poisoned)?;
        Ok(values.get(name).cloned())
    }

    fn update_option(&self, name: &str, value: &str) -> OptionsResult<()> {
        if name.is_empty() {
            return Err(OptionsError::InvalidName(name.to_string()));
        }
        let mut values = self.values.write().map_err(|_| OptionsError::Poisoned)?;
        values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn delete_option(&self, name: &str) -> OptionsResult<bool> {
        let mut values = self.values.write().map_err(|_| OptionsError::Poisoned)?;
        Ok(values.remove(name).is_some())
    }
}
