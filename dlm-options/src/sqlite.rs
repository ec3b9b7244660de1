//! SQLite-backed option storage.
//!
//! Uses one `options` table keyed by name, mirroring the host's option
//! table. Writes are upserts, so the last writer wins.

use crate::Options;
use crate::error::{OptionsError, OptionsResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Persistent option store backed by SQLite.
pub struct SqliteOptionStore {
    conn: Mutex<Connection>,
}

impl SqliteOptionStore {
    /// Opens (or creates) an option store at the given path.
    pub fn open(path: impl AsRef<Path>) -> OptionsResult<Self> {
        let path = path.as_ref();
        debug!("Opening option store at {}", path.display());
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory option store (for testing).
    pub fn open_in_memory() -> OptionsResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> OptionsResult<Self> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS options (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Returns all option names in ascending order.
    pub fn option_names(&self) -> OptionsResult<Vec<String>> {
        let conn = self.conn.lock().map_err(|_| OptionsError::Poisoned)?;
        let mut stmt = conn.prepare("SELECT name FROM options ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}

impl Options for SqliteOptionStore {
    fn get_option(&self, name: &str) -> OptionsResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| OptionsError::Poisoned)?;
        let value = conn
            .query_row(
                "SELECT value FROM options WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn update_option(&self, name: &str, value: &str) -> OptionsResult<()> {
        if name.is_empty() {
            return Err(OptionsError::InvalidName(name.to_string()));
        }
        let conn = self.conn.lock().map_err(|_| OptionsError::Poisoned)?;
        conn.execute(
            "INSERT INTO options (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            params![name, value],
        )?;
        Ok(())
    }

    fn delete_option(&self, name: &str) -> OptionsResult<bool> {
        let conn = self.conn.lock().map_err(|_| OptionsError::Poisoned)?;
        let removed = conn.execute("DELETE FROM options WHERE name = ?1", params![name])?;
        Ok(removed > 0)
    }
}
