//! Fare estimation.
//!
//! A pure computation over already-known distance and duration; geocoding and
//! routing happen elsewhere.  The estimator is deterministic: identical
//! inputs always produce an identical [`FareBreakdown`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Invalid estimator input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FareError {
    #[error("distance must be >= 0, got {0}")]
    NegativeDistance(f64),

    #[error("duration must be >= 0, got {0}")]
    NegativeDuration(f64),

    #[error("peak multiplier must be >= 1.0, got {0}")]
    MultiplierBelowOne(f64),
}

/// Pricing parameters for one fare computation.  All amounts are in currency
/// units; rates are per kilometre and per minute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FareSchedule {
    pub base_fare: f64,
    pub price_per_km: f64,
    pub price_per_minute: f64,
    pub minimum_fare: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: constants::DEFAULT_BASE_FARE,
            price_per_km: constants::DEFAULT_PRICE_PER_KM,
            price_per_minute: constants::DEFAULT_PRICE_PER_MINUTE,
            minimum_fare: constants::DEFAULT_MINIMUM_FARE,
        }
    }
}

/// Itemized price decomposition handed to the UI layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FareBreakdown {
    pub base_fare: f64,
    pub distance_fare: f64,
    /// Zero when no duration was supplied.
    pub time_fare: f64,
    pub subtotal: f64,
    /// Zero when the peak multiplier is exactly 1.0.
    pub peak_charge: f64,
    pub total: f64,
    /// True when the minimum-fare floor lifted the total.
    pub minimum_fare_applied: bool,
}

impl FareSchedule {
    /// Compute the price breakdown for a trip.
    ///
    /// `duration_minutes` is optional because a quote may be requested before
    /// any route estimate exists; the time component is then zero.  The total
    /// never falls below `minimum_fare`.
    pub fn estimate(
        &self,
        distance_km: f64,
        duration_minutes: Option<f64>,
        peak_multiplier: f64,
    ) -> Result<FareBreakdown, FareError> {
        if distance_km < 0.0 {
            return Err(FareError::NegativeDistance(distance_km));
        }
        if let Some(d) = duration_minutes {
            if d < 0.0 {
                return Err(FareError::NegativeDuration(d));
            }
        }
        if peak_multiplier < 1.0 {
            return Err(FareError::MultiplierBelowOne(peak_multiplier));
        }

        let distance_fare = distance_km * self.price_per_km;
        let time_fare = duration_minutes.map_or(0.0, |d| d * self.price_per_minute);
        let subtotal = self.base_fare + distance_fare + time_fare;
        let peak_charge = subtotal * (peak_multiplier - 1.0);
        let raw_total = subtotal + peak_charge;

        let minimum_fare_applied = raw_total < self.minimum_fare;
        let total = if minimum_fare_applied {
            self.minimum_fare
        } else {
            raw_total
        };

        Ok(FareBreakdown {
            base_fare: self.base_fare,
            distance_fare,
            time_fare,
            subtotal,
            peak_charge,
            total,
            minimum_fare_applied,
        })
    }
}
