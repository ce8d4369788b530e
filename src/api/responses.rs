use crate::estimation::{ImpactTier, TipCategory, TransportMode};
use serde::{Deserialize, Serialize};

/// Raw trip form as submitted. Every field is optional so that missing
/// values surface as validation errors rather than body rejections.
#[derive(Debug, Default, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub mode: Option<TransportMode>,
    #[serde(default)]
    pub factor: Option<serde_json::Value>,
    #[serde(default)]
    pub distance_km: Option<serde_json::Value>,
    #[serde(default)]
    pub passengers: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EstimateSuccessResponse {
    pub total_co2_kg: f64,
    pub total_co2_display: String,
    pub tree_years_equivalent: u64,
    pub home_energy_days_equivalent: f64,
    pub car_km_equivalent: u64,
    pub impact: ImpactResponse,
    pub tip_category: TipCategory,
    pub tips: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ImpactResponse {
    pub tier: ImpactTier,
    pub label: String,
    pub css_class: String,
}

#[derive(Debug, Serialize)]
pub struct TransportModesResponse {
    pub modes: Vec<TransportModeResponse>,
}

#[derive(Debug, Serialize)]
pub struct TransportModeResponse {
    pub mode: TransportMode,
    pub label: String,
    pub factor: f64,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub category: TipCategory,
    pub tips: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub model: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error_code: ErrorCode,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    NonPositiveInput,
    OutOfRange,
    UnknownCategory,
    InternalError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_uses_screaming_snake_case_code() {
        let response = ErrorResponse {
            error_code: ErrorCode::NonPositiveInput,
            error_message: "Distância e número de passageiros devem ser maiores que zero."
                .to_string(),
            field: Some("distance_km".to_string()),
            timestamp: "2026-01-11T12:32:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize error response");
        assert_eq!(
            value,
            json!({
                "error_code": "NON_POSITIVE_INPUT",
                "error_message": "Distância e número de passageiros devem ser maiores que zero.",
                "field": "distance_km",
                "timestamp": "2026-01-11T12:32:00Z"
            })
        );
    }

    #[test]
    fn error_response_omits_field_when_none() {
        let response = ErrorResponse {
            error_code: ErrorCode::InvalidInput,
            error_message: "bad body".to_string(),
            field: None,
            timestamp: "2026-01-11T12:33:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize error response");
        assert_eq!(
            value,
            json!({
                "error_code": "INVALID_INPUT",
                "error_message": "bad body",
                "timestamp": "2026-01-11T12:33:00Z"
            })
        );
    }

    #[test]
    fn success_response_serializes_tier_and_category_lowercase() {
        let response = EstimateSuccessResponse {
            total_co2_kg: 24.0,
            total_co2_display: "24.00 kg".to_string(),
            tree_years_equivalent: 2,
            home_energy_days_equivalent: 2.4,
            car_km_equivalent: 200,
            impact: ImpactResponse {
                tier: ImpactTier::Low,
                label: "Baixo Impacto".to_string(),
                css_class: "impact-low".to_string(),
            },
            tip_category: TipCategory::Car,
            tips: vec!["tip".to_string()],
            timestamp: "2026-01-11T12:30:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize success response");
        assert_eq!(
            value,
            json!({
                "total_co2_kg": 24.0,
                "total_co2_display": "24.00 kg",
                "tree_years_equivalent": 2,
                "home_energy_days_equivalent": 2.4,
                "car_km_equivalent": 200,
                "impact": {
                    "tier": "low",
                    "label": "Baixo Impacto",
                    "css_class": "impact-low"
                },
                "tip_category": "car",
                "tips": ["tip"],
                "timestamp": "2026-01-11T12:30:00Z"
            })
        );
    }

    #[test]
    fn estimate_request_tolerates_missing_fields() {
        let request: EstimateRequest =
            serde_json::from_value(json!({ "mode": "bus" })).expect("deserialize request");

        assert_eq!(request.mode, Some(TransportMode::Bus));
        assert!(request.distance_km.is_none());
        assert!(request.passengers.is_none());
    }

    #[test]
    fn transport_modes_response_wraps_list_in_modes() {
        let response = TransportModesResponse {
            modes: vec![TransportModeResponse {
                mode: TransportMode::Train,
                label: "Trem".to_string(),
                factor: 0.041,
            }],
        };

        let value = serde_json::to_value(response).expect("serialize modes response");
        assert_eq!(
            value,
            json!({
                "modes": [
                    { "mode": "train", "label": "Trem", "factor": 0.041 }
                ]
            })
        );
    }
}
