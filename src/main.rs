//! Account Ledger Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the identity resolver and the empty customer directory
//! 3. Build HTTP router with routes and middleware
//! 4. Serve on the configured address until Ctrl-C

use account_ledger_server::{
    config::Config, middleware::identify::HeaderIdentity, router, state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let identity = HeaderIdentity::from_name(&config.identity_header)?;
    tracing::info!(header = %config.identity_header, "Identifying customers by header");

    let app = router(AppState::new(identity));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped; in-memory ledger discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        // Keep serving; without a signal handler there is nothing to wait on
        std::future::pending::<()>().await;
    }
}
