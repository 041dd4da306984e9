//! Priced itineraries returned by a search

use super::{AirportCode, Currency};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure_at: NaiveDateTime,
    pub arrival_at: NaiveDateTime,
    pub airline: String,
    pub flight_number: String,
    pub aircraft: Option<String>,
    pub duration_minutes: u32,
}

impl FlightSegment {
    /// Builds a leg whose arrival is derived from the departure and duration.
    pub fn scheduled(
        origin: AirportCode,
        destination: AirportCode,
        departure_at: NaiveDateTime,
        duration_minutes: u32,
        airline: String,
        flight_number: String,
        aircraft: Option<String>,
    ) -> Self {
        Self {
            origin,
            destination,
            departure_at,
            arrival_at: departure_at + Duration::minutes(i64::from(duration_minutes)),
            airline,
            flight_number,
            aircraft,
            duration_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    pub price: f64,
    pub currency: Currency,
    pub segments: Vec<FlightSegment>,
    pub total_duration_minutes: u32,
    pub stops: u32,
    pub booking_url: String,
    pub airline_name: Option<String>,
}

impl FlightOption {
    pub fn departure_at(&self) -> Option<NaiveDateTime> {
        self.segments.first().map(|segment| segment.departure_at)
    }

    pub fn arrival_at(&self) -> Option<NaiveDateTime> {
        self.segments.last().map(|segment| segment.arrival_at)
    }

    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResult {
    pub flights: Vec<FlightOption>,
    pub total_results: usize,
    pub currency: Currency,
    pub search_completed: bool,
}

impl FlightSearchResult {
    pub fn new(flights: Vec<FlightOption>, currency: Currency) -> Self {
        Self {
            total_results: flights.len(),
            flights,
            currency,
            search_completed: true,
        }
    }
}
