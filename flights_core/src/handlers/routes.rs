use super::{flights, health};
use crate::{error::AppError, models::ApiResponse, AppState};
use axum::{
    extract::{OriginalUri, State},
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(handle_root))
        .route("/api/", get(handle_root))
        .route("/api/health", get(health::handle_health))
        .route("/api/flights/search", post(flights::handle_search))
        .route(
            "/api/flights/destinations/popular",
            get(flights::handle_popular_destinations),
        )
        .route("/api/flights/status", get(flights::handle_flight_status))
        .fallback(handle_not_found)
        .method_not_allowed_fallback(handle_method_not_allowed)
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/");

    Json(ApiResponse::success(
        serde_json::json!({
            "app": state.app_name,
            "version": state.version,
            "endpoints": {
                "health": "/api/health",
                "search": "/api/flights/search",
                "popular_destinations": "/api/flights/destinations/popular",
                "flight_status": "/api/flights/status?flight_number={number}"
            }
        }),
        "YYZ Flights API - Toronto's Premier Flight Booking Platform",
    ))
}

async fn handle_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn handle_method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} is not allowed on {}", method, uri.path()))
}
