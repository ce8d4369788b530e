use crate::api::responses::EstimateRequest;
use crate::error::ValidationError;
use crate::estimation::TripRequest;
use serde_json::Value;

/// Largest trip total (kg CO2) accepted. Keeps the rounded total finite and
/// every derived count well inside `u64`.
pub const MAX_TRIP_CO2_KG: f64 = 1e12;

/// Turns a submitted form into a trip request.
///
/// Presence and numeric checks run for every field before any positivity
/// check, so an empty form always reports the "fill in all fields" message.
pub fn parse_trip_request(request: &EstimateRequest) -> Result<TripRequest, ValidationError> {
    let factor = match request.mode {
        Some(mode) => mode.factor(),
        None => read_number(request.factor.as_ref(), "factor")?,
    };
    let distance_km = read_number(request.distance_km.as_ref(), "distance_km")?;
    let passengers = read_number(request.passengers.as_ref(), "passengers")?.trunc();

    if !factor.is_finite() || factor <= 0.0 {
        return Err(ValidationError::InvalidFactor(factor));
    }
    if distance_km <= 0.0 {
        return Err(ValidationError::NonPositive("distance_km"));
    }
    if passengers <= 0.0 {
        return Err(ValidationError::NonPositive("passengers"));
    }
    if passengers > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange("passengers"));
    }
    let total = factor * distance_km * passengers;
    if !total.is_finite() || total > MAX_TRIP_CO2_KG {
        return Err(ValidationError::TotalOverflow);
    }

    Ok(TripRequest::new(factor, distance_km, passengers as u32))
}

fn read_number(value: Option<&Value>, field: &'static str) -> Result<f64, ValidationError> {
    let number = match value {
        None | Some(Value::Null) => return Err(ValidationError::MissingField(field)),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(ValidationError::MissingField(field));
        }
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match number {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(ValidationError::NotANumber(field)),
    }
}
