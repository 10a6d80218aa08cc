//! Generic REST resource implementing the store's remote seam.
//!
//! The collection path, the list wrapper key and the record wrapper key all
//! derive from the [`Entity`] constants, so rides and appointments (and any
//! future kind) share one implementation:
//!
//! - `GET    /<storage_key>`        list
//! - `POST   /<storage_key>`        create
//! - `PATCH  /<storage_key>/{id}`   update
//! - `DELETE /<storage_key>/{id}`   delete

use std::marker::PhantomData;

use async_trait::async_trait;

use hail_shared::Entity;
use hail_store::{RemoteCollection, Result};

use crate::client::ApiClient;
use crate::envelope;

/// REST-backed [`RemoteCollection`] for one record kind.
pub struct Resource<E> {
    client: ApiClient,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Entity> Resource<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    fn record_path(id: &str) -> String {
        format!("{}/{}", E::STORAGE_KEY, id)
    }
}

#[async_trait]
impl<E: Entity> RemoteCollection<E> for Resource<E> {
    async fn create(&self, draft: &E::Draft) -> Result<E> {
        tracing::debug!(kind = E::KIND, "remote create");
        let body = self.client.post_json(E::STORAGE_KEY, draft).await?;
        Ok(envelope::unwrap_record(body, E::KIND)?)
    }

    async fn update(&self, id: &str, patch: &E::Patch) -> Result<E> {
        tracing::debug!(kind = E::KIND, id, "remote update");
        let body = self.client.patch_json(&Self::record_path(id), patch).await?;
        Ok(envelope::unwrap_record(body, E::KIND)?)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        tracing::debug!(kind = E::KIND, id, "remote delete");
        self.client.delete(&Self::record_path(id)).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<E>> {
        tracing::debug!(kind = E::KIND, "remote list");
        let body = self.client.get_json(E::STORAGE_KEY).await?;
        Ok(envelope::unwrap_list(body, E::STORAGE_KEY)?)
    }
}
