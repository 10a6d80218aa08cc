//! # hail-shared
//!
//! Domain types shared between the store, the API client and the app shell:
//! ride and appointment models, their status state machines, the fare
//! estimator, and runtime configuration.

pub mod config;
pub mod constants;
pub mod entity;
pub mod fare;
pub mod models;
pub mod status;
pub mod types;

pub use config::Config;
pub use entity::Entity;
pub use fare::{FareBreakdown, FareError, FareSchedule};
pub use models::{
    Appointment, AppointmentDraft, AppointmentPatch, Ride, RideDraft, RidePatch,
};
pub use status::{AppointmentStatus, RideStatus, TransitionError};
pub use types::{AppointmentId, Location, RideId};
