// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use feedback_server::AppState;
use feedback_server::config::ServerConfig;
use feedback_server::store::SqliteStore;
use feedback_server::transport::app_router;
use tracing::{info, warn};

use crate::log::LogLevel;

mod log;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config from custom path if specified
    let config_path = env::var("CONFIG_FILE").ok();
    let config = if let Some(path) = config_path.as_deref() {
        ServerConfig::load_with_env(Some(path))
    } else {
        ServerConfig::load()
    }
    .context("Failed to load configuration")?;

    let log_level: LogLevel = config
        .log_level
        .parse()
        .unwrap_or_else(|err: String| fatal!("{err}"));
    let _guard = log::new(log_level);

    let addr = config.socket_addr()?;

    let store = SqliteStore::connect(&config.database)
        .await
        .context("Failed to open feedback database")?;

    if config.cors.allows_any_origin() {
        warn!("CORS is open to every origin");
    } else {
        info!(origins = ?config.cors.allowed_origins, "CORS restricted");
    }

    let app = app_router(AppState::new(config, Arc::new(store.clone())));

    info!("Server listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
