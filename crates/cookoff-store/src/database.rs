//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation. Collections are stored as
//! whole JSON documents in a single table; see
//! [`collections`](crate::collections) for the typed accessors.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/cookoff/cookoff.db`
    /// - macOS:   `~/Library/Application Support/com.cookoff.cookoff/cookoff.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\cookoff\cookoff\data\cookoff.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "cookoff", "cookoff").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("cookoff.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Open an ephemeral in-memory database (nothing survives the handle).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed collection accessors, but direct
    /// access is occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }

    // ------------------------------------------------------------------
    // Whole-collection JSON storage
    // ------------------------------------------------------------------

    /// Read a named collection, or `None` when it has never been written.
    pub(crate) fn read_raw<T: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> Result<Option<T>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM collections WHERE name = ?1",
                params![collection],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        body.map(|json| {
            serde_json::from_str(&json).map_err(|source| StoreError::Serde { collection, source })
        })
        .transpose()
    }

    /// Replace a named collection wholesale.
    pub(crate) fn write_raw<T: Serialize>(&self, collection: &'static str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|source| StoreError::Serde { collection, source })?;
        self.conn.execute(
            "INSERT OR REPLACE INTO collections (name, body) VALUES (?1, ?2)",
            params![collection, json],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open_at(&path).expect("should open");
        assert!(db.path().is_some());
    }

    #[test]
    fn test_missing_collection_reads_none() {
        let db = Database::open_in_memory().unwrap();
        let read: Option<Vec<String>> = db.read_raw("chefs").unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_write_then_read_raw() {
        let db = Database::open_in_memory().unwrap();
        let names = vec!["asha".to_string(), "ravi".to_string()];
        db.write_raw("chefs", &names).unwrap();

        let read: Option<Vec<String>> = db.read_raw("chefs").unwrap();
        assert_eq!(read, Some(names));
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let db = Database::open_in_memory().unwrap();
        db.write_raw("chefs", &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        db.write_raw("chefs", &vec!["c".to_string()]).unwrap();

        let read: Option<Vec<String>> = db.read_raw("chefs").unwrap();
        assert_eq!(read, Some(vec!["c".to_string()]));
    }

    #[test]
    fn test_reopen_preserves_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persist.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.write_raw("chefs", &vec![1u32, 2, 3]).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        let read: Option<Vec<u32>> = db.read_raw("chefs").unwrap();
        assert_eq!(read, Some(vec![1, 2, 3]));
    }
}
