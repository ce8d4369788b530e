use crate::api::responses::{
    ErrorCode, ErrorResponse, EstimateRequest, EstimateSuccessResponse, HealthResponse,
    HealthStatus, ImpactResponse, TipsResponse, TransportModeResponse, TransportModesResponse,
};
use crate::api::validation::parse_trip_request;
use crate::error::ValidationError;
use crate::estimation::{TipCategory, TransportMode, assess_trip, lookup_tips};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use std::time::SystemTime;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, error, info};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

pub enum ApiResponse<T> {
    Success(T),
    Error {
        status: StatusCode,
        body: ErrorResponse,
    },
}

impl<T: serde::Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            ApiResponse::Error { status, body } => (status, Json(body)).into_response(),
        }
    }
}

pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(ValidationError::MalformedBody(rejection.body_text())),
    };
    build_estimate_response(&state, request, SystemTime::now())
}

pub async fn get_transport_modes() -> impl IntoResponse {
    Json(build_transport_modes_response())
}

pub async fn get_tips(Path(category): Path<String>) -> impl IntoResponse {
    build_tips_response(&category, SystemTime::now())
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_health_response(&state, SystemTime::now())
}

pub(crate) fn build_estimate_response(
    state: &AppState,
    request: Result<EstimateRequest, ValidationError>,
    now: SystemTime,
) -> ApiResponse<EstimateSuccessResponse> {
    let trip = match request.and_then(|request| parse_trip_request(&request)) {
        Ok(trip) => trip,
        Err(err) => {
            info!(error = ?err, "Rejected trip estimate request");
            return validation_error(&err, now);
        }
    };

    let assessment = assess_trip(state.model().as_ref(), &trip);
    debug!(
        factor = trip.factor,
        distance_km = trip.distance_km,
        passengers = trip.passengers,
        total_co2_kg = assessment.result.total_co2_kg,
        impact = ?assessment.impact,
        "Trip estimated"
    );

    let timestamp = match format_timestamp(now) {
        Ok(formatted) => formatted,
        Err(_) => return internal_error("timestamp formatting failure"),
    };

    let result = assessment.result;
    ApiResponse::Success(EstimateSuccessResponse {
        total_co2_kg: result.total_co2_kg,
        total_co2_display: format!("{:.2} kg", result.total_co2_kg),
        tree_years_equivalent: result.tree_years_equivalent,
        home_energy_days_equivalent: result.home_energy_days_equivalent,
        car_km_equivalent: result.car_km_equivalent,
        impact: ImpactResponse {
            tier: assessment.impact,
            label: assessment.impact.label().to_string(),
            css_class: assessment.impact.css_class().to_string(),
        },
        tip_category: assessment.tip_category,
        tips: to_owned_tips(assessment.tips),
        timestamp,
    })
}

pub(crate) fn build_transport_modes_response() -> TransportModesResponse {
    TransportModesResponse {
        modes: TransportMode::ALL
            .into_iter()
            .map(|mode| TransportModeResponse {
                mode,
                label: mode.label().to_string(),
                factor: mode.factor(),
            })
            .collect(),
    }
}

pub(crate) fn build_tips_response(category: &str, now: SystemTime) -> ApiResponse<TipsResponse> {
    match TipCategory::parse(category) {
        Some(category) => ApiResponse::Success(TipsResponse {
            category,
            tips: to_owned_tips(lookup_tips(category)),
        }),
        None => error_response(
            StatusCode::NOT_FOUND,
            ErrorCode::UnknownCategory,
            format!("Unknown tip category: {category}"),
            None,
            now,
        ),
    }
}

pub(crate) fn build_health_response(
    state: &AppState,
    now: SystemTime,
) -> ApiResponse<HealthResponse> {
    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::Success(HealthResponse {
            status: HealthStatus::Ok,
            model: state.model().name().to_string(),
            timestamp,
        }),
        Err(_) => internal_error("timestamp formatting failure"),
    }
}

fn to_owned_tips(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|tip| (*tip).to_string()).collect()
}

fn validation_error<T>(err: &ValidationError, now: SystemTime) -> ApiResponse<T> {
    let code = match err {
        ValidationError::NonPositive(_) => ErrorCode::NonPositiveInput,
        ValidationError::MissingField(_)
        | ValidationError::NotANumber(_)
        | ValidationError::InvalidFactor(_)
        | ValidationError::MalformedBody(_)
        | ValidationError::TotalOverflow => ErrorCode::InvalidInput,
        ValidationError::OutOfRange(_) => ErrorCode::OutOfRange,
    };
    error_response(
        StatusCode::BAD_REQUEST,
        code,
        err.to_string(),
        err.field().map(str::to_string),
        now,
    )
}

fn error_response<T>(
    status: StatusCode,
    error_code: ErrorCode,
    error_message: String,
    field: Option<String>,
    now: SystemTime,
) -> ApiResponse<T> {
    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::Error {
            status,
            body: ErrorResponse {
                error_code,
                error_message,
                field,
                timestamp,
            },
        },
        Err(_) => internal_error("timestamp formatting failure"),
    }
}

fn internal_error<T>(message: &str) -> ApiResponse<T> {
    error!(message = message, "Internal error while handling request");
    let formatted = format_timestamp(SystemTime::now()).unwrap_or_else(|err| {
        error!(error = %err, "Failed to format internal error timestamp");
        FALLBACK_TIMESTAMP.to_string()
    });
    ApiResponse::Error {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            error_code: ErrorCode::InternalError,
            error_message: INTERNAL_ERROR_MESSAGE.to_string(),
            field: None,
            timestamp: formatted,
        },
    }
}

fn format_timestamp(timestamp: SystemTime) -> Result<String, time::error::Format> {
    OffsetDateTime::from(timestamp).format(&Rfc3339)
}
