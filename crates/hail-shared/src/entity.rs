//! The seam between concrete domain records and the generic collection store.
//!
//! The original client duplicated its persistence logic once per record kind;
//! implementing [`Entity`] is all a new kind needs to get storage, the
//! local/remote mode split, and the REST wrappers for free.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::status::TransitionError;

/// A record kind the collection store can persist and the API client can
/// talk to the backend about.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Creation payload: the caller-supplied fields of a new record.
    type Draft: Clone + Send + Sync + Serialize + DeserializeOwned;
    /// Partial update payload; every field optional.
    type Patch: Clone + Send + Sync + Serialize + DeserializeOwned;

    /// Key of the persisted collection blob.  Doubles as the REST collection
    /// path segment and the wrapper property name in enveloped responses.
    const STORAGE_KEY: &'static str;

    /// Short singular label used in log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Synthesize a process-unique identifier for a locally created record.
    fn local_id() -> String;

    /// Materialize a full record from a draft, with the kind's initial status
    /// and both timestamps set to `now`.
    fn from_draft(draft: Self::Draft, id: String, now: DateTime<Utc>) -> Self;

    /// Merge a partial update into `self`: fields absent from the patch stay
    /// unchanged, `updated_at` becomes `now`.  Status changes must follow the
    /// kind's state machine.
    fn apply_patch(
        &mut self,
        patch: &Self::Patch,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError>;
}
