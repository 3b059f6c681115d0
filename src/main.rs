//! Service entry point.
//!
//! Loads static config, initializes logging, and runs the bootstrap
//! sequence. Fatal bootstrap errors propagate out of `main`; a failed
//! discovery registration does not.

use std::path::PathBuf;

use flight_status_service::config::{self, Environment};
use flight_status_service::lifecycle::{signals, Bootstrap};
use flight_status_service::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path =
        PathBuf::from(std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string()));
    let config = config::load_or_default(&config_path)?;

    observability::logging::init(&config.observability);

    let environment = Environment::from_env();
    tracing::info!(
        service = %config.service.name,
        environment = %environment,
        "starting"
    );

    let bootstrap = Bootstrap::from_config(config, environment);
    signals::spawn_signal_listener(bootstrap.shutdown_handle());

    let ready = bootstrap.run().await?;
    tracing::info!(
        address = %ready.local_addr,
        registered = ready.registered,
        "service ready"
    );

    // Serve until a shutdown signal drains the server.
    ready.server.await??;

    tracing::info!("shutdown complete");
    Ok(())
}
