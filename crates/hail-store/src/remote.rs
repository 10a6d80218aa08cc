//! The seam between the collection store and the booking backend.
//!
//! `hail-api` provides the real `reqwest` implementations; tests substitute
//! in-memory mocks so both store modes run without a network.

use async_trait::async_trait;

use hail_shared::Entity;

use crate::error::Result;

/// Remote CRUD surface for one record kind.
///
/// Implementations perform a single attempt per call; retries and caching are
/// the store's concern, not the transport's.  Errors should carry the
/// server's message when one is available (see [`StoreError::Remote`]).
///
/// [`StoreError::Remote`]: crate::error::StoreError::Remote
#[async_trait]
pub trait RemoteCollection<E: Entity>: Send + Sync {
    /// Create a record on the backend; returns the server-assigned record.
    async fn create(&self, draft: &E::Draft) -> Result<E>;

    /// Update a record on the backend; returns the server's representation,
    /// which replaces the local one ("server wins" while connected).
    async fn update(&self, id: &str, patch: &E::Patch) -> Result<E>;

    /// Delete a record on the backend.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Fetch the full collection from the backend.
    async fn list(&self) -> Result<Vec<E>>;
}
