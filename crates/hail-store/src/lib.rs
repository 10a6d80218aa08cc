//! # hail-store
//!
//! On-device persistence for the Hail client.  Each record kind lives in one
//! JSON collection blob inside a local SQLite key-value table; the generic
//! [`CollectionStore`] keeps an in-memory copy synchronized with that blob
//! and, when remote-enabled, with the booking backend.
//!
//! Every mutation rewrites the full collection under a per-collection lock,
//! so concurrent writers can never silently drop each other's changes.

pub mod collection;
pub mod database;
pub mod migrations;
pub mod remote;
pub mod store;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use remote::RemoteCollection;
pub use store::CollectionStore;
