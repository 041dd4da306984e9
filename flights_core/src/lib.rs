//! Core library for the YYZ Flights mock flight-search API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod reference;
pub mod services;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::{cors_layer_from_config, cors_layer_permissive};
pub use reference::{ReferenceData, ReferenceDataError};
pub use services::{source_from_config, FlightService, RandomSource};
pub use store::BackingStore;

use anyhow::Context;
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub flights: FlightService,
    pub store: BackingStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), Arc::new(ReferenceData::builtin()))
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig, reference: Arc<ReferenceData>) -> Self {
        Self::new(
            FlightService::new(reference, config.search.clone(), source_from_config(&config.generator)),
            BackingStore::from_config(&config.database),
        )
    }

    pub fn new(flights: FlightService, store: BackingStore) -> Self {
        Self {
            app_name: "YYZ Flights API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            flights,
            store,
        }
    }
}

/// Loads reference tables from `reference.data_path`, or the built-in set.
pub fn load_reference_data(config: &AppConfig) -> std::result::Result<ReferenceData, ReferenceDataError> {
    match &config.reference.data_path {
        Some(path) => {
            info!("Loading reference data from {}", path.display());
            ReferenceData::from_file(path)
        }
        None => Ok(ReferenceData::builtin()),
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    create_routes()
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
