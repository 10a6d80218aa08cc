//! Record lifecycle state machines.
//!
//! The original client let callers write any status over any other; the state
//! machines here make illegal transitions (e.g. completed back to requested)
//! a hard error instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attempted status change that the state machine forbids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("illegal status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: String,
    pub to: String,
}

impl TransitionError {
    pub fn new(from: impl ToString, to: impl ToString) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ride
// ---------------------------------------------------------------------------

/// Ride lifecycle: requested -> accepted -> in_progress -> completed, with
/// cancellation possible from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the state machine permits moving from `self` to `next`.
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Requested, Self::Accepted)
            | (Self::Accepted, Self::InProgress)
            | (Self::InProgress, Self::Completed) => true,
            (from, Self::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Appointment
// ---------------------------------------------------------------------------

/// Appointment lifecycle: pending -> confirmed -> completed, with
/// cancellation possible from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed) | (Self::Confirmed, Self::Completed) => true,
            (from, Self::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ride_forward_path_is_legal() {
        assert!(RideStatus::Requested.can_transition_to(RideStatus::Accepted));
        assert!(RideStatus::Accepted.can_transition_to(RideStatus::InProgress));
        assert!(RideStatus::InProgress.can_transition_to(RideStatus::Completed));
    }

    #[test]
    fn ride_cancel_from_any_non_terminal() {
        assert!(RideStatus::Requested.can_transition_to(RideStatus::Cancelled));
        assert!(RideStatus::Accepted.can_transition_to(RideStatus::Cancelled));
        assert!(RideStatus::InProgress.can_transition_to(RideStatus::Cancelled));
        assert!(!RideStatus::Completed.can_transition_to(RideStatus::Cancelled));
        assert!(!RideStatus::Cancelled.can_transition_to(RideStatus::Cancelled));
    }

    #[test]
    fn ride_backward_and_skipping_edges_rejected() {
        assert!(!RideStatus::Completed.can_transition_to(RideStatus::Requested));
        assert!(!RideStatus::Requested.can_transition_to(RideStatus::InProgress));
        assert!(!RideStatus::Requested.can_transition_to(RideStatus::Completed));
        assert!(!RideStatus::Cancelled.can_transition_to(RideStatus::Accepted));
    }

    #[test]
    fn appointment_edges() {
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Confirmed));
        assert!(AppointmentStatus::Confirmed.can_transition_to(AppointmentStatus::Completed));
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Cancelled));
        assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Pending));
        assert!(!AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Completed));
    }

    #[test]
    fn status_serde_uses_snake_case() {
        let json = serde_json::to_string(&RideStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: RideStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, RideStatus::Cancelled);
    }
}
