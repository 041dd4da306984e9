//! Main entry point for the YYZ Flights API server

use anyhow::Result;
use flights_core::{
    config::LoggingConfig, create_app_with_config, load_reference_data, run_server, AppConfig,
    AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_tracing(&config.logging);

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());

    let addr: SocketAddr = config.bind_address().parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let reference = load_reference_data(&config)
        .map_err(|e| anyhow::anyhow!("Failed to load reference data: {}", e))?;
    info!(
        "Reference data: {} airports, {} carriers, {} price bands",
        reference.airports.len(),
        reference.carriers.len(),
        reference.prices.len()
    );

    if let Some(seed) = config.generator.seed {
        warn!("Generator seed {} is set, search results will be deterministic", seed);
    }

    let state = AppState::from_config(&config, Arc::new(reference));
    let store = state.store.clone();

    info!("App: {} v{}", state.app_name, state.version);
    info!("Backing store: {}", store.describe());

    let app = create_app_with_config(state, &config);

    let served = run_server(app, addr).await;

    store.close();
    served?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let default_level = if logging.level.is_empty() {
                if cfg!(debug_assertions) { "debug" } else { "info" }
            } else {
                logging.level.as_str()
            };

            format!(
                "{}={level},flights_core={level},tower_http=debug",
                env!("CARGO_CRATE_NAME").replace('-', "_"),
                level = default_level
            ).into()
        });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or_else(|_| logging.is_json());

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
