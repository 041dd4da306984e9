//! HTTP handlers

pub mod flights;
pub mod health;
pub mod routes;

pub use routes::create_routes;
