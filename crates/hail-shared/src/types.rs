use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Ride identifier — either synthesized locally ("ride-<uuid4>") or assigned
// by the backend when a ride is created remotely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RideId(pub String);

impl RideId {
    /// Synthesize an identifier for a ride created on-device.
    ///
    /// The original client derived ids from the wall clock alone, which can
    /// collide under rapid successive creates; a v4 UUID cannot.
    pub fn new_local() -> Self {
        Self(format!("ride-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub String);

impl AppointmentId {
    /// Synthesize an identifier for an appointment created on-device.
    pub fn new_local() -> Self {
        Self(format!("appt-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pickup or dropoff point.  Coordinates are optional because the user may
/// have typed a free-form address that was never geocoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Human-readable address or place name.
    pub label: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Location {
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lat: None,
            lon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_ids_are_unique() {
        let a = RideId::new_local();
        let b = RideId::new_local();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("ride-"));
        assert!(AppointmentId::new_local().as_str().starts_with("appt-"));
    }
}
