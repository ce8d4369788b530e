use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub mod handlers;
pub mod responses;
pub mod validation;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/trips/estimate", post(handlers::post_estimate))
        .route("/api/transport-modes", get(handlers::get_transport_modes))
        .route("/api/tips/{category}", get(handlers::get_tips))
        .route("/api/health", get(handlers::get_health))
        .with_state(state)
}
