use anyhow::Result;
use axum_envelope::{create_router_with, AppConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let endpoint = config.server.bind_addr.clone();

    let app = create_router_with(config)?;

    info!("Starting at endpoint:{}", endpoint);
    info!("Starting Envelope API server v{}...", env!("CARGO_PKG_VERSION"));

    let listener = TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", err);
    }
}
