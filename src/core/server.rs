// Application server configuration and setup

use std::time::Duration;

use anyhow::Result;
use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, Router};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::cors::CorsLayer;

use crate::api::call::routes::call_routes;
use crate::api::health::routes::health_routes;
use crate::config::state::AppState;
use crate::utils::error_handler::handle_global_error;

/// Creates and configures the application router with all middleware layers.
/// Store handles travel inside `state`; nothing here reaches for a global.
pub fn create_app(state: AppState) -> Router {
    let env = state.environment.clone();

    Router::new()
        .merge(call_routes())
        .merge(health_routes())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
                // The telephony platform posts cross-origin; allow any origin
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(state: &AppState) -> Result<TcpListener> {
    let env = &state.environment;
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }

    // Gracefully close store connections
    state.shutdown().await;
}
