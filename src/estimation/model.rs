//! Estimation model trait and the values it works on.
//!
//! A model turns a validated [`TripRequest`] into an [`EmissionResult`]. The
//! comparison baselines it uses can be overridden through `calibration.json`.

use serde::{Deserialize, Serialize};

use crate::estimation::transport::TransportMode;

/// CO2 absorbed by one tree over a year (kg).
pub const CO2_PER_TREE_YEAR_KG: f64 = 21.0;
/// CO2 attributed to one day of household consumption (kg).
pub const CO2_PER_HOME_DAY_KG: f64 = 10.0;
/// CO2 emitted per km by an average car (kg).
pub const CO2_PER_CAR_KM_KG: f64 = 0.12;

/// Fixed rates used to express a trip total as everyday equivalents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonBaselines {
    pub co2_per_tree_year_kg: f64,
    pub co2_per_home_day_kg: f64,
    pub co2_per_car_km_kg: f64,
}

impl Default for ComparisonBaselines {
    fn default() -> Self {
        Self {
            co2_per_tree_year_kg: CO2_PER_TREE_YEAR_KG,
            co2_per_home_day_kg: CO2_PER_HOME_DAY_KG,
            co2_per_car_km_kg: CO2_PER_CAR_KM_KG,
        }
    }
}

/// A single trip to estimate. Callers validate before constructing one:
/// factor > 0, distance > 0, passengers >= 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    /// kg CO2 per passenger-km
    pub factor: f64,
    pub distance_km: f64,
    pub passengers: u32,
}

impl TripRequest {
    pub fn new(factor: f64, distance_km: f64, passengers: u32) -> Self {
        Self {
            factor,
            distance_km,
            passengers,
        }
    }

    pub fn for_mode(mode: TransportMode, distance_km: f64, passengers: u32) -> Self {
        Self::new(mode.factor(), distance_km, passengers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionResult {
    /// Rounded to 2 decimals.
    pub total_co2_kg: f64,
    /// Rounded up so the offset is never understated.
    pub tree_years_equivalent: u64,
    /// Rounded to 1 decimal.
    pub home_energy_days_equivalent: f64,
    pub car_km_equivalent: u64,
}

/// Trait for models that estimate trip emissions.
///
/// Implement this trait to add new models. The model is selected via the
/// `model` field in `calibration.json`.
pub trait EmissionsModel: Send + Sync + std::fmt::Debug {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;

    fn compute_emissions(&self, request: &TripRequest) -> EmissionResult;

    fn baselines(&self) -> &ComparisonBaselines;
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_precision() {
        assert_eq!(round_to(24.004, 2), 24.0);
        assert_eq!(round_to(2.46, 1), 2.5);
        assert_eq!(round_to(25.500000000000004, 1), 25.5);
    }

    #[test]
    fn request_for_mode_uses_mode_factor() {
        let request = TripRequest::for_mode(TransportMode::Train, 300.0, 2);
        assert_eq!(request.factor, 0.041);
        assert_eq!(request.passengers, 2);
    }
}
