// Voice webhook route definitions

use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the telephony webhook endpoint
pub fn call_routes() -> Router<AppState> {
    Router::new()
        .route("/call-handler", post(handler::call_handler))
}
