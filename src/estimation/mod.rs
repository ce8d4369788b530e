use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

pub mod impact;
pub mod linear;
pub mod model;
pub mod tips;
pub mod transport;

pub use impact::{ImpactTier, classify_impact};
pub use model::{ComparisonBaselines, EmissionResult, EmissionsModel, TripRequest};
pub use tips::{TipCategory, classify_tip_category, lookup_tips};
pub use transport::TransportMode;

use linear::LinearModel;

static DEFAULT_MODEL: LazyLock<LinearModel> = LazyLock::new(LinearModel::with_defaults);

/// Estimates a single trip with the default comparison baselines.
///
/// Inputs are expected to be validated already (factor > 0, distance > 0,
/// passengers >= 1); this never fails.
pub fn compute_emissions(factor: f64, distance_km: f64, passengers: u32) -> EmissionResult {
    DEFAULT_MODEL.compute_emissions(&TripRequest::new(factor, distance_km, passengers))
}

/// Full assessment of one trip: emissions, tier and tip selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TripAssessment {
    pub result: EmissionResult,
    pub impact: ImpactTier,
    pub tip_category: TipCategory,
    pub tips: &'static [&'static str],
}

pub fn assess_trip(model: &dyn EmissionsModel, request: &TripRequest) -> TripAssessment {
    let result = model.compute_emissions(request);
    let tip_category = classify_tip_category(request.factor);
    TripAssessment {
        result,
        impact: classify_impact(result.total_co2_kg),
        tip_category,
        tips: lookup_tips(tip_category),
    }
}

// Model Factory
pub fn create_model(
    config: &CalibrationFile,
) -> Result<Box<dyn EmissionsModel>, CalibrationError> {
    match config.model.as_str() {
        "linear" => {
            let baselines: ComparisonBaselines = match &config.params {
                Some(params) => serde_json::from_value(params.clone())?,
                None => ComparisonBaselines::default(),
            };
            validate_baselines(&baselines)?;
            Ok(Box::new(LinearModel::new(baselines)))
        }
        other => Err(CalibrationError::Invalid(format!("unknown model: {other}"))),
    }
}

fn validate_baselines(baselines: &ComparisonBaselines) -> Result<(), CalibrationError> {
    let fields = [
        ("co2_per_tree_year_kg", baselines.co2_per_tree_year_kg),
        ("co2_per_home_day_kg", baselines.co2_per_home_day_kg),
        ("co2_per_car_km_kg", baselines.co2_per_car_km_kg),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalibrationError::Invalid(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CalibrationFile {
    pub model: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("failed to read calibration file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse calibration file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid calibration: {0}")]
    Invalid(String),
}

pub fn load_calibration_from_path(
    path: impl AsRef<Path>,
) -> Result<Box<dyn EmissionsModel>, CalibrationError> {
    let contents = std::fs::read_to_string(path)?;
    let config: CalibrationFile = serde_json::from_str(&contents)?;
    create_model(&config)
}
