//! Host option storage for Download Monitor.
//!
//! Options are named string values, the same shape as the host's option
//! table. Every other crate reads its settings and persists its records
//! through the [`Options`] trait, which is passed in explicitly rather than
//! looked up globally.
//!
//! Two implementations are provided:
//! - [`SqliteOptionStore`]: a single-table SQLite file
//! - [`MemoryOptions`]: a map, for tests and embedding

mod error;
mod memory;
mod sqlite;

pub use error::{OptionsError, OptionsResult};
pub use memory::MemoryOptions;
pub use sqlite::SqliteOptionStore;

/// Named string values persisted by the host.
pub trait Options: Send + Sync {
    /// Returns the stored value, or `None` if the option was never set.
    fn get_option(&self, name: &str) -> OptionsResult<Option<String>>;

    /// Inserts or replaces the value of an option.
    fn update_option(&self, name: &str, value: &str) -> OptionsResult<()>;

    /// Removes an option. Returns true if it existed.
    fn delete_option(&self, name: &str) -> OptionsResult<bool>;

    /// Returns the stored value, or `default` if the option was never set.
    fn get_option_or(&self, name: &str, default: &str) -> OptionsResult<String> {
        Ok(self
            .get_option(name)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Reads a `"1"`/`"0"` style flag. Any value other than `"1"` is off.
    fn get_flag(&self, name: &str, default: bool) -> OptionsResult<bool> {
        Ok(match self.get_option(name)? {
            Some(value) => value.trim() == "1",
            None => default,
        })
    }
}
