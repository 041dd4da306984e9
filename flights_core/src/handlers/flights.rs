//! Flight search, popular destination and status handlers

use crate::{
    error::Result,
    extractors::{EnvelopeJson, EnvelopeQuery},
    models::{ApiResponse, FlightSearchPayload},
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;

pub async fn handle_search(
    State(state): State<AppState>,
    EnvelopeJson(payload): EnvelopeJson<FlightSearchPayload>,
) -> Result<impl IntoResponse> {
    info!(
        "POST /api/flights/search - {} -> {} on {}",
        payload.origin, payload.destination, payload.departure_date
    );

    let today = chrono::Local::now().date_naive();
    let result = state.flights.search(payload, today)?;
    let message = format!("Found {} flight options", result.total_results);

    Ok(Json(ApiResponse::success(result, message)))
}

#[derive(Debug, Deserialize)]
pub struct PopularDestinationsQuery {
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    "YYZ".to_string()
}

/// The curated list does not depend on `origin`; it is only logged.
pub async fn handle_popular_destinations(
    State(state): State<AppState>,
    EnvelopeQuery(query): EnvelopeQuery<PopularDestinationsQuery>,
) -> impl IntoResponse {
    info!("GET /api/flights/destinations/popular - origin: {}", query.origin);

    let destinations = state.flights.popular_destinations();
    let message = format!("Retrieved {} popular destinations", destinations.len());

    Json(ApiResponse::success(destinations, message))
}

#[derive(Debug, Deserialize)]
pub struct FlightStatusQuery {
    pub flight_number: String,
}

pub async fn handle_flight_status(
    State(state): State<AppState>,
    EnvelopeQuery(query): EnvelopeQuery<FlightStatusQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/flights/status - flight_number: {}", query.flight_number);

    let record = state.flights.flight_status(&query.flight_number, chrono::Utc::now())?;
    let message = format!("Flight status for {}", record.flight_number);

    Ok(Json(ApiResponse::success(record, message)))
}
