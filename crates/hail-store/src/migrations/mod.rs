//! Schema migrations.
//!
//! Every [`Database::open_at`] (and therefore [`Database::new`]) runs the
//! migration chain before the connection is handed out.  Applied steps are
//! tracked through SQLite's `user_version` pragma, so each one executes at
//! most once per database file.
//!
//! Note that `user_version` only covers the table shape.  The records inside
//! each collection blob carry their own `schema_version` field and are
//! migrated (or tolerated) at load time by [`crate::collection`].
//!
//! [`Database::new`]: crate::database::Database::new
//! [`Database::open_at`]: crate::database::Database::open_at

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Highest migration this build knows about.  A new `v00N` module plus a
/// bump here is all a table-shape change needs.
const CURRENT_VERSION: u32 = 1;

/// Bring the open connection up to [`CURRENT_VERSION`], applying any steps
/// the database file has not seen yet, in order.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        current_version = current,
        target_version = CURRENT_VERSION,
        "checking database migrations"
    );

    if current < 1 {
        tracing::info!("applying migration v001_initial");
        v001_initial::up(conn).map_err(|e| StoreError::Migration(e.to_string()))?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}
