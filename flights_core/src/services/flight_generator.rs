//! Synthetic flight option generation
//!
//! Produces plausible non-stop itineraries for a classified route. Every
//! value is drawn from the reference tables and the supplied RNG; nothing is
//! cached or persisted, so identical queries may yield different options.

use crate::config::SearchConfig;
use crate::models::{Currency, FlightOption, FlightSegment, Route, RouteClass};
use crate::reference::ReferenceData;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

const DEPARTURE_HOURS: std::ops::RangeInclusive<u32> = 6..=22;
const PRICE_SKEW: std::ops::RangeInclusive<f64> = -0.2..=0.3;
const FLIGHT_NUMBERS: std::ops::RangeInclusive<u32> = 100..=9999;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No price range configured for {route_class} flights in {currency}")]
    MissingPriceRange {
        route_class: RouteClass,
        currency: Currency,
    },

    #[error("Carrier table is empty")]
    NoCarriers,

    #[error("Aircraft list is empty")]
    NoAircraft,

    #[error("Cannot schedule a departure at {hour:02}:{minute:02} on {date}")]
    InvalidDeparture { date: NaiveDate, hour: u32, minute: u32 },
}

/// Inclusive duration bounds in minutes for a route class.
pub fn duration_bounds(route_class: RouteClass) -> std::ops::RangeInclusive<u32> {
    match route_class {
        RouteClass::Domestic => 90..=360,
        RouteClass::International => 360..=900,
    }
}

/// What a search asks the generator for.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub route: Route,
    pub currency: Currency,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

pub struct FlightGenerator<'a> {
    reference: &'a ReferenceData,
    settings: &'a SearchConfig,
}

impl<'a> FlightGenerator<'a> {
    pub fn new(reference: &'a ReferenceData, settings: &'a SearchConfig) -> Self {
        Self {
            reference,
            settings,
        }
    }

    /// Generates between `min_results` and `max_results` options sorted by
    /// ascending price.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        query: &FlightQuery,
    ) -> Result<Vec<FlightOption>, GenerationError> {
        let price_range = self
            .reference
            .price_range(query.route.class, query.currency)
            .ok_or(GenerationError::MissingPriceRange {
                route_class: query.route.class,
                currency: query.currency,
            })?;

        let count = rng.gen_range(self.settings.min_results..=self.settings.max_results);
        debug!(
            route_class = %query.route.class,
            count,
            round_trip = query.return_date.is_some(),
            "Generating {} -> {} options",
            query.route.origin,
            query.route.destination
        );

        let booking_url = self.booking_url(query);
        let mut options = Vec::with_capacity(count);

        for _ in 0..count {
            let carrier = self
                .reference
                .carriers
                .choose(rng)
                .ok_or(GenerationError::NoCarriers)?;

            let hour = rng.gen_range(DEPARTURE_HOURS);
            let minute = rng.gen_range(0..=59);
            let departure_at = query
                .departure_date
                .and_hms_opt(hour, minute, 0)
                .ok_or(GenerationError::InvalidDeparture {
                    date: query.departure_date,
                    hour,
                    minute,
                })?;

            let duration_minutes = rng.gen_range(duration_bounds(query.route.class));

            let base_price = price_range.sample(rng);
            let skew = rng.gen_range(PRICE_SKEW);
            let price = round_to_cents(base_price * (1.0 + skew));

            let flight_number = format!("{}{}", carrier.code, rng.gen_range(FLIGHT_NUMBERS));
            let aircraft = self
                .reference
                .aircraft
                .choose(rng)
                .ok_or(GenerationError::NoAircraft)?
                .clone();

            let segment = FlightSegment::scheduled(
                query.route.origin.clone(),
                query.route.destination.clone(),
                departure_at,
                duration_minutes,
                carrier.code.clone(),
                flight_number,
                Some(aircraft),
            );

            options.push(FlightOption {
                price,
                currency: query.currency,
                segments: vec![segment],
                total_duration_minutes: duration_minutes,
                stops: 0,
                booking_url: booking_url.clone(),
                airline_name: Some(carrier.name.clone()),
            });
        }

        options.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(options)
    }

    /// `<base><ORIGIN><DESTINATION><ddmmyy>?marker=<marker>`
    pub fn booking_url(&self, query: &FlightQuery) -> String {
        format!(
            "{}{}{}{}?marker={}",
            self.settings.booking_base_url,
            query.route.origin,
            query.route.destination,
            query.departure_date.format("%d%m%y"),
            self.settings.booking_marker
        )
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
