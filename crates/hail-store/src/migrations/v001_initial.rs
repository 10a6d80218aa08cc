//! v001 -- Initial schema creation.
//!
//! Creates the single `collections` key-value table.  Record-level schema
//! lives inside the JSON blobs and is versioned separately by the
//! `schema_version` field of each blob.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Collections: one serialized array-of-records blob per record kind
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS collections (
    key        TEXT PRIMARY KEY NOT NULL,   -- e.g. "rides", "appointments"
    json       TEXT NOT NULL,               -- versioned collection envelope
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
