// Liveness and readiness handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::state::AppState;

/// Constant liveness payload.
#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Liveness probe. Always reports OK; never reflects store state.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus { status: "OK" })
}

/// Readiness probe backed by the store readiness flag set at startup.
#[instrument(skip(state))]
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if state.mongo.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
