//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.  Domain data is stored as
//! one JSON blob per collection key in the `collections` table; SQLite is the
//! durable key-value layer, not a relational schema over the records.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

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
    /// - Linux:   `~/.local/share/hail/hail.db`
    /// - macOS:   `~/Library/Application Support/com.hail.hail/hail.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\hail\hail\data\hail.db`
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "hail", "hail").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("hail.db");

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
        conn.pragma_update(None, "foreign_keys", "ON")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Read the serialized collection blob stored under `key`, if any.
    pub fn read_blob(&self, key: &str) -> Result<Option<String>> {
        let json = self
            .conn
            .query_row(
                "SELECT json FROM collections WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(json)
    }

    /// Write (replace) the serialized collection blob stored under `key`.
    ///
    /// The whole collection is rewritten on every mutation; readers never see
    /// a partially written blob because the statement is a single SQLite
    /// transaction.
    pub fn write_blob(&self, key: &str, json: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO collections (key, json, updated_at) VALUES (?1, ?2, ?3)",
            params![key, json, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the blob helpers, but direct access is
    /// occasionally needed for pragmas or ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
