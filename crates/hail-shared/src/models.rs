//! Domain model structs persisted in the local collection blobs.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be written
//! to storage and exchanged with the backend unchanged.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::entity::Entity;
use crate::status::{AppointmentStatus, RideStatus, TransitionError};
use crate::types::{AppointmentId, Location, RideId};

// ---------------------------------------------------------------------------
// Ride
// ---------------------------------------------------------------------------

/// A booked (or requested) ride.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ride {
    pub id: RideId,
    pub pickup: Location,
    pub dropoff: Location,
    pub status: RideStatus,
    /// Fare quoted at booking time, if an estimate was shown.
    pub quoted_fare: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new ride request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideDraft {
    pub pickup: Location,
    pub dropoff: Location,
    #[serde(default)]
    pub quoted_fare: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial ride update.  `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RidePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RideStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_fare: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RidePatch {
    /// Patch that only moves the ride to `status`.
    pub fn status(status: RideStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Entity for Ride {
    type Draft = RideDraft;
    type Patch = RidePatch;

    const STORAGE_KEY: &'static str = constants::RIDES_KEY;
    const KIND: &'static str = "ride";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn local_id() -> String {
        RideId::new_local().0
    }

    fn from_draft(draft: RideDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: RideId(id),
            pickup: draft.pickup,
            dropoff: draft.dropoff,
            status: RideStatus::Requested,
            quoted_fare: draft.quoted_fare,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: &RidePatch, now: DateTime<Utc>) -> Result<(), TransitionError> {
        if let Some(next) = patch.status {
            if !self.status.can_transition_to(next) {
                return Err(TransitionError::new(self.status, next));
            }
            self.status = next;
        }
        if let Some(pickup) = &patch.pickup {
            self.pickup = pickup.clone();
        }
        if let Some(dropoff) = &patch.dropoff {
            self.dropoff = dropoff.clone();
        }
        if let Some(fare) = patch.quoted_fare {
            self.quoted_fare = Some(fare);
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
        self.updated_at = now;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Appointment
// ---------------------------------------------------------------------------

/// A scheduled appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Entity for Appointment {
    type Draft = AppointmentDraft;
    type Patch = AppointmentPatch;

    const STORAGE_KEY: &'static str = constants::APPOINTMENTS_KEY;
    const KIND: &'static str = "appointment";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn local_id() -> String {
        AppointmentId::new_local().0
    }

    fn from_draft(draft: AppointmentDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: AppointmentId(id),
            title: draft.title,
            date: draft.date,
            time: draft.time,
            status: AppointmentStatus::Pending,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(
        &mut self,
        patch: &AppointmentPatch,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        if let Some(next) = patch.status {
            if !self.status.can_transition_to(next) {
                return Err(TransitionError::new(self.status, next));
            }
            self.status = next;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ride() -> Ride {
        Ride::from_draft(
            RideDraft {
                pickup: Location::named("Central Station"),
                dropoff: Location::named("Airport"),
                quoted_fare: Some(3.5),
                notes: None,
            },
            Ride::local_id(),
            Utc::now(),
        )
    }

    #[test]
    fn draft_gets_initial_status_and_timestamps() {
        let ride = sample_ride();
        assert_eq!(ride.status, RideStatus::Requested);
        assert_eq!(ride.created_at, ride.updated_at);
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let mut ride = sample_ride();
        let before = ride.clone();
        let later = before.updated_at + chrono::Duration::seconds(5);

        ride.apply_patch(
            &RidePatch {
                notes: Some("ring on arrival".into()),
                ..RidePatch::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(ride.pickup, before.pickup);
        assert_eq!(ride.dropoff, before.dropoff);
        assert_eq!(ride.status, before.status);
        assert_eq!(ride.quoted_fare, before.quoted_fare);
        assert_eq!(ride.notes.as_deref(), Some("ring on arrival"));
        assert_eq!(ride.created_at, before.created_at);
        assert_eq!(ride.updated_at, later);
    }

    #[test]
    fn patch_rejects_illegal_status_jump() {
        let mut ride = sample_ride();
        let err = ride
            .apply_patch(&RidePatch::status(RideStatus::Completed), Utc::now())
            .unwrap_err();
        assert_eq!(err, TransitionError::new("requested", "completed"));
        // Record untouched on failure.
        assert_eq!(ride.status, RideStatus::Requested);
    }

    #[test]
    fn appointment_patch_follows_state_machine() {
        let mut appt = Appointment::from_draft(
            AppointmentDraft {
                title: "Checkup".into(),
                date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                notes: None,
            },
            Appointment::local_id(),
            Utc::now(),
        );

        appt.apply_patch(
            &AppointmentPatch::status(AppointmentStatus::Confirmed),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(appt.status, AppointmentStatus::Confirmed);

        assert!(appt
            .apply_patch(&AppointmentPatch::status(AppointmentStatus::Pending), Utc::now())
            .is_err());
    }
}
