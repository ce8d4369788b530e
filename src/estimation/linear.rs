//! Linear emissions model.
//!
//! Formula: total_co2_kg = factor * distance_km * passengers

use crate::estimation::model::{
    ComparisonBaselines, EmissionResult, EmissionsModel, TripRequest, round_to,
};

/// Linear emissions model.
///
/// Derived metrics are computed from the unrounded total; only the reported
/// total is rounded to 2 decimals.
#[derive(Debug)]
pub struct LinearModel {
    pub baselines: ComparisonBaselines,
}

impl LinearModel {
    pub fn new(baselines: ComparisonBaselines) -> Self {
        Self { baselines }
    }

    pub fn with_defaults() -> Self {
        Self::new(ComparisonBaselines::default())
    }
}

impl EmissionsModel for LinearModel {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn compute_emissions(&self, request: &TripRequest) -> EmissionResult {
        let total = request.factor * request.distance_km * f64::from(request.passengers);

        EmissionResult {
            total_co2_kg: round_to(total, 2),
            tree_years_equivalent: (total / self.baselines.co2_per_tree_year_kg).ceil() as u64,
            home_energy_days_equivalent: round_to(total / self.baselines.co2_per_home_day_kg, 1),
            car_km_equivalent: (total / self.baselines.co2_per_car_km_kg).round() as u64,
        }
    }

    fn baselines(&self) -> &ComparisonBaselines {
        &self.baselines
    }
}
