use thiserror::Error;

use hail_shared::TransitionError;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Update/delete target missing from the collection.
    #[error("Record not found")]
    NotFound,

    /// A patch asked for a status change the state machine forbids.
    #[error("{0}")]
    Transition(#[from] TransitionError),

    /// Error surfaced from a remote API call, carrying the server's message
    /// when one was available.
    #[error("Remote API error: {0}")]
    Remote(String),

    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Collection blob (de)serialization failure on write.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
