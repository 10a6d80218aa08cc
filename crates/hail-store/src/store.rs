//! The generic optimistic collection store.
//!
//! One [`CollectionStore`] instance manages one record kind.  In local-only
//! mode every mutation is applied to the in-memory collection and the full
//! blob is rewritten; in remote-enabled mode the backend call must succeed
//! first and only its result is applied locally.
//!
//! A `tokio::sync::Mutex` around the in-memory collection is held across the
//! whole read-modify-write (including the remote call and the blob rewrite),
//! so two concurrent mutations are serialized instead of the second silently
//! overwriting the first's blob.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use hail_shared::Entity;

use crate::collection;
use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::remote::RemoteCollection;

/// Local-first store for one record kind.
///
/// Cloning is cheap and clones share the same collection and database.
pub struct CollectionStore<E: Entity> {
    db: Arc<Mutex<Database>>,
    records: Arc<Mutex<Vec<E>>>,
    remote: Option<Arc<dyn RemoteCollection<E>>>,
}

impl<E: Entity> Clone for CollectionStore<E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            records: Arc::clone(&self.records),
            remote: self.remote.clone(),
        }
    }
}

impl<E: Entity> CollectionStore<E> {
    /// Open the store, priming the in-memory collection from the persisted
    /// blob.  Never touches the network, even when `remote` is set: first
    /// paint always comes from the local cache.
    ///
    /// `remote` is `Some` exactly when the process runs remote-enabled
    /// (`Config::api_enabled`); the flag is decided once at startup.
    pub async fn open(
        db: Arc<Mutex<Database>>,
        remote: Option<Arc<dyn RemoteCollection<E>>>,
    ) -> Result<Self> {
        let records = {
            let db = db.lock().await;
            collection::load_records::<E>(&db)?
        };

        tracing::info!(
            kind = E::KIND,
            count = records.len(),
            remote_enabled = remote.is_some(),
            "collection store opened"
        );

        Ok(Self {
            db,
            records: Arc::new(Mutex::new(records)),
            remote,
        })
    }

    /// Current collection.  When remote-enabled this first refreshes from
    /// the backend, replacing both the in-memory collection and the blob; a
    /// failed refresh keeps the existing data (stale beats empty).
    pub async fn list(&self) -> Result<Vec<E>> {
        let mut records = self.records.lock().await;

        if let Some(remote) = &self.remote {
            match remote.list().await {
                Ok(fresh) => {
                    self.persist(&fresh).await?;
                    *records = fresh;
                }
                Err(e) => {
                    tracing::warn!(
                        kind = E::KIND,
                        error = %e,
                        "remote list failed, serving cached collection"
                    );
                }
            }
        }

        Ok(records.clone())
    }

    /// Fetch a single record by id from the in-memory collection.
    pub async fn get(&self, id: &str) -> Result<E> {
        let records = self.records.lock().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Create a record.
    ///
    /// Local-only: synthesize the id and timestamps and append.
    /// Remote-enabled: the backend creates the record and assigns the id;
    /// nothing is applied locally unless the call succeeds.
    pub async fn create(&self, draft: E::Draft) -> Result<E> {
        let mut records = self.records.lock().await;

        let record = match &self.remote {
            Some(remote) => remote.create(&draft).await?,
            None => E::from_draft(draft, E::local_id(), Utc::now()),
        };

        let mut next = records.clone();
        next.push(record.clone());
        self.persist(&next).await?;
        *records = next;

        tracing::debug!(kind = E::KIND, id = record.id(), "record created");
        Ok(record)
    }

    /// Merge a partial update into the record with `id`.
    ///
    /// Local-only: the client-computed merge wins and the state machine
    /// guards status changes.  Remote-enabled: the backend is updated first
    /// and its returned representation replaces the local record.
    pub async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
        let mut records = self.records.lock().await;

        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;

        let updated = match &self.remote {
            Some(remote) => remote.update(id, &patch).await?,
            None => {
                let mut merged = records[idx].clone();
                merged.apply_patch(&patch, Utc::now())?;
                merged
            }
        };

        let mut next = records.clone();
        next[idx] = updated.clone();
        self.persist(&next).await?;
        *records = next;

        tracing::debug!(kind = E::KIND, id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id`.
    ///
    /// Deleting an id that is not present is an error, consistently with
    /// [`update`](Self::update).  Remote-enabled: the backend delete must
    /// succeed before the record disappears locally.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().await;

        if !records.iter().any(|r| r.id() == id) {
            return Err(StoreError::NotFound);
        }

        if let Some(remote) = &self.remote {
            remote.remove(id).await?;
        }

        let mut next = records.clone();
        next.retain(|r| r.id() != id);
        self.persist(&next).await?;
        *records = next;

        tracing::debug!(kind = E::KIND, id, "record removed");
        Ok(())
    }

    /// Rewrite the persisted blob from the given records.  Callers hold the
    /// collection lock, so writes for one kind never interleave; they commit
    /// the in-memory replacement only after this succeeds, so a storage
    /// fault cannot leave memory ahead of the blob.
    async fn persist(&self, records: &[E]) -> Result<()> {
        let db = self.db.lock().await;
        collection::save_records(&db, records)
    }
}
