use crate::{
    config::SearchConfig,
    error::{AppError, Result},
    models::{FlightSearchPayload, FlightSearchResult, FlightStatusRecord, PopularDestination, SearchRequest},
    reference::ReferenceData,
    validation::ValidationContext,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::debug;

use super::{
    flight_generator::{FlightGenerator, FlightQuery},
    random::RandomSource,
    route_classifier::RouteClassifier,
    status_board::StatusBoard,
};

#[derive(Clone)]
pub struct FlightService {
    reference: Arc<ReferenceData>,
    settings: SearchConfig,
    random: Arc<dyn RandomSource>,
}

impl FlightService {
    pub fn new(
        reference: Arc<ReferenceData>,
        settings: SearchConfig,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            reference,
            settings,
            random,
        }
    }

    /// Validates the raw payload against `today`, then runs the search.
    pub fn search(&self, payload: FlightSearchPayload, today: NaiveDate) -> Result<FlightSearchResult> {
        let context = ValidationContext::new(today, self.settings.booking_window_days);
        let request = payload
            .into_search_request(&context)
            .map_err(AppError::Validation)?;

        self.search_validated(&request)
    }

    fn search_validated(&self, request: &SearchRequest) -> Result<FlightSearchResult> {
        let classifier = RouteClassifier::new(&self.reference.airports);
        let route = classifier.route(request.origin.clone(), request.destination.clone());

        debug!(
            passengers = request.total_passengers(),
            trip_class = %request.trip_class,
            direct_only = request.direct_flights_only,
            "Classified {} -> {} as {}",
            route.origin,
            route.destination,
            route.class
        );

        let query = FlightQuery {
            route,
            currency: request.currency,
            departure_date: request.departure_date,
            return_date: request.return_date,
        };

        let generator = FlightGenerator::new(&self.reference, &self.settings);
        let mut rng = self.random.rng();
        let flights = generator.generate(&mut rng, &query)?;

        Ok(FlightSearchResult::new(flights, request.currency))
    }

    pub fn popular_destinations(&self) -> Vec<PopularDestination> {
        self.reference.popular_destinations.clone()
    }

    pub fn flight_status(&self, flight_number: &str, now: DateTime<Utc>) -> Result<FlightStatusRecord> {
        let board = StatusBoard::new(&self.reference);
        let mut rng = self.random.rng();
        Ok(board.lookup(&mut rng, flight_number, now)?)
    }
}
