//! Middleware components for the HTTP server

pub mod cors;
pub mod logging;

pub use cors::{cors_layer_from_config, cors_layer_permissive};
pub use logging::logging_layer;
