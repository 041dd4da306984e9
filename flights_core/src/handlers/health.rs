use crate::models::ApiResponse;
use axum::{response::IntoResponse, Json};
use tracing::info;

/// Liveness only; no dependency is checked.
pub async fn handle_health() -> impl IntoResponse {
    info!("GET /api/health");

    Json(ApiResponse::success(
        serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
        "YYZ Flights API is healthy",
    ))
}
