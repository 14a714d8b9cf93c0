//! # Pilot New Year Main Entry Point
//!
//! Initializes logging, loads configuration, binds the HTTP listener and
//! serves the page, the calculation endpoint and the health routes until
//! Ctrl-C is received.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pilot_new_year::config::Config;
use pilot_new_year::utils::logging::log_system_event;
use pilot_new_year::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pilot_new_year=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Pilot New Year v{}", env!("CARGO_PKG_VERSION"));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", address, e))?;

    log_system_event("HTTP server listening", Some(&address));

    axum::serve(listener, web::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Keep serving rather than stopping right away
        std::future::pending::<()>().await;
    }
    log_system_event("Shutdown requested", None);
}
