//! The versioned collection envelope.
//!
//! Each record kind is persisted as a single JSON document wrapping the full
//! record array.  The `schema_version` field exists so a future release can
//! migrate old blobs instead of guessing at their shape.

use serde::{Deserialize, Serialize};

use hail_shared::Entity;

use crate::database::Database;
use crate::error::Result;

/// Version written into every persisted blob.
pub const SCHEMA_VERSION: u32 = 1;

/// Serialized form of one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionBlob<E> {
    pub schema_version: u32,
    pub records: Vec<E>,
}

/// Load the persisted records for `E`, or an empty collection.
///
/// A missing blob, malformed JSON, or a blob written by a newer schema all
/// yield an empty collection rather than an error: first paint must never be
/// blocked by a bad cache.  Storage-layer read faults still propagate.
pub fn load_records<E: Entity>(db: &Database) -> Result<Vec<E>> {
    let Some(json) = db.read_blob(E::STORAGE_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<CollectionBlob<E>>(&json) {
        Ok(blob) if blob.schema_version <= SCHEMA_VERSION => Ok(blob.records),
        Ok(blob) => {
            tracing::warn!(
                key = E::STORAGE_KEY,
                blob_version = blob.schema_version,
                supported = SCHEMA_VERSION,
                "collection blob written by a newer schema, starting empty"
            );
            Ok(Vec::new())
        }
        Err(e) => {
            tracing::warn!(
                key = E::STORAGE_KEY,
                error = %e,
                "unreadable collection blob, starting empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Persist the full record array for `E`, replacing the previous blob.
///
/// Serialization and storage faults propagate; a failed write must be visible
/// to the caller, not swallowed.
pub fn save_records<E: Entity>(db: &Database, records: &[E]) -> Result<()> {
    let blob = CollectionBlob {
        schema_version: SCHEMA_VERSION,
        records: records.to_vec(),
    };
    let json = serde_json::to_string(&blob)?;
    db.write_blob(E::STORAGE_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hail_shared::{Location, Ride, RideDraft};

    fn open_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    fn sample_ride() -> Ride {
        Ride::from_draft(
            RideDraft {
                pickup: Location::named("A"),
                dropoff: Location::named("B"),
                quoted_fare: None,
                notes: None,
            },
            Ride::local_id(),
            Utc::now(),
        )
    }

    #[test]
    fn missing_blob_loads_empty() {
        let (_dir, db) = open_db();
        let records: Vec<Ride> = load_records(&db).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, db) = open_db();
        let ride = sample_ride();

        save_records(&db, std::slice::from_ref(&ride)).unwrap();
        let records: Vec<Ride> = load_records(&db).unwrap();
        assert_eq!(records, vec![ride]);
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let (_dir, db) = open_db();
        db.write_blob(Ride::STORAGE_KEY, "not json at all").unwrap();

        let records: Vec<Ride> = load_records(&db).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn newer_schema_version_loads_empty() {
        let (_dir, db) = open_db();
        db.write_blob(
            Ride::STORAGE_KEY,
            &format!(r#"{{"schema_version":{},"records":[]}}"#, SCHEMA_VERSION + 1),
        )
        .unwrap();

        let records: Vec<Ride> = load_records(&db).unwrap();
        assert!(records.is_empty());
    }
}
