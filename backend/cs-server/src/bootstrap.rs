//! Startup and shutdown shared by both service binaries.

use crate::{ServerError, ServerResult, logger};

use cs_config::Config;

use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;

/// Load `.env`, load and validate config, then start logging.
pub fn init(service: &'static str) -> ServerResult<Config> {
    // Load .env file if present (development)
    let dotenv = dotenvy::dotenv();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir)?;
    }

    logger::initialize(
        service,
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Starting {} v{}", service, env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Ok(config)
}

/// Bind `addr` and serve `app` until Ctrl+C.
pub async fn serve(addr: &str, app: Router) -> ServerResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
