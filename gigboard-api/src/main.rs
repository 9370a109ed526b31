//! # Gigboard API Server
//!
//! Serves the user, order and offer endpoints over HTTP.
//!
//! ## Startup
//!
//! 1. Load configuration from the environment
//! 2. Open the database, apply migrations, load fixtures
//! 3. Bind the listener and serve until Ctrl-C
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p gigboard-api
//! ```

use gigboard_api::{
    app::{build_router, AppState},
    config::Config,
    startup::prepare_database,
};
use gigboard_shared::db::pool::close_pool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let json_logs = config.log.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gigboard_api=debug,gigboard_shared=info,tower_http=debug".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!(
        "Gigboard API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let pool = prepare_database(&config).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(pool.clone(), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting...");
    close_pool(pool).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
