//! Hail client shell.
//!
//! Wires configuration, the local database, and the ride/appointment stores
//! together, then runs a short booking flow so the whole stack can be
//! exercised from a terminal while the UI layers are developed elsewhere.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

use hail_api::{ApiClient, Resource};
use hail_shared::{
    constants, Appointment, Config, FareSchedule, Location, Ride, RideDraft, RidePatch, RideStatus,
};
use hail_store::{CollectionStore, Database, RemoteCollection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hail_client=debug,hail_store=info,hail_api=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let config = Config::from_env();
    tracing::info!(
        api_enabled = config.api_enabled,
        api_base_url = %config.api_base_url,
        "starting Hail client"
    );

    let db = Database::new().context("failed to open local database")?;
    let db = Arc::new(Mutex::new(db));

    let remote_rides: Option<Arc<dyn RemoteCollection<Ride>>> = config
        .api_enabled
        .then(|| {
            let client = ApiClient::new(config.api_base_url.clone());
            Arc::new(Resource::<Ride>::new(client)) as Arc<dyn RemoteCollection<Ride>>
        });

    let rides: CollectionStore<Ride> = CollectionStore::open(Arc::clone(&db), remote_rides)
        .await
        .context("failed to open ride store")?;

    // Quote a sample trip with the default schedule.
    let schedule = FareSchedule::default();
    let quote = schedule
        .estimate(5.0, Some(10.0), constants::DEFAULT_PEAK_MULTIPLIER)
        .context("fare estimate failed")?;
    tracing::info!(
        total = quote.total,
        peak_charge = quote.peak_charge,
        floored = quote.minimum_fare_applied,
        "sample fare quote"
    );

    // Book, accept, and list.
    let ride = rides
        .create(RideDraft {
            pickup: Location::named("Central Station"),
            dropoff: Location::named("Airport"),
            quoted_fare: Some(quote.total),
            notes: None,
        })
        .await
        .context("ride creation failed")?;
    tracing::info!(id = %ride.id, "ride requested");

    let ride = rides
        .update(ride.id.as_str(), RidePatch::status(RideStatus::Accepted))
        .await
        .context("ride acceptance failed")?;
    tracing::info!(id = %ride.id, status = %ride.status, "ride updated");

    let all = rides.list().await.context("ride listing failed")?;
    tracing::info!(count = all.len(), "rides on device");

    let remote_appointments: Option<Arc<dyn RemoteCollection<Appointment>>> =
        config.api_enabled.then(|| {
            let client = ApiClient::new(config.api_base_url.clone());
            Arc::new(Resource::<Appointment>::new(client)) as Arc<dyn RemoteCollection<Appointment>>
        });

    let appointments: CollectionStore<Appointment> =
        CollectionStore::open(Arc::clone(&db), remote_appointments)
            .await
            .context("failed to open appointment store")?;
    let booked = appointments.list().await.context("appointment listing failed")?;
    tracing::info!(count = booked.len(), "appointments on device");

    Ok(())
}
