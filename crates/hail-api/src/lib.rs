//! # hail-api
//!
//! REST wrappers over the booking backend.  [`Resource`] implements the
//! store's [`RemoteCollection`] trait for any record kind, so the store never
//! sees HTTP; it only sees records and errors.
//!
//! [`RemoteCollection`]: hail_store::RemoteCollection

pub mod client;
pub mod envelope;
pub mod resource;

mod error;

pub use client::ApiClient;
pub use error::ApiError;
pub use resource::Resource;
