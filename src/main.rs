use anyhow::Result;
use axum::serve;
use tokio::net::TcpListener;

use autocall_relay::config::state::AppState;
use autocall_relay::core::{logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    // set up logging
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    // Stores connect in the background; the server never waits on them.
    state.spawn_store_init();

    let app = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state).await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal(state))
        .await?;

    Ok(())
}
