//! Synthetic flight status lookups

use crate::models::{FlightStatus, FlightStatusRecord};
use crate::reference::ReferenceData;
use crate::validation::split_flight_number;
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

const TERMINALS: [&str; 2] = ["1", "3"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlightNumberError {
    #[error("Flight number '{0}' must be a 2-character airline code followed by 1-4 digits")]
    Malformed(String),

    #[error("Unknown carrier '{0}'")]
    UnknownCarrier(String),
}

pub struct StatusBoard<'a> {
    reference: &'a ReferenceData,
}

impl<'a> StatusBoard<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Synthesizes a status record for `flight_number` relative to `now`.
    ///
    /// Actual departure is only filled for departed or arrived flights, actual
    /// arrival only for arrived ones.
    pub fn lookup<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        flight_number: &str,
        now: DateTime<Utc>,
    ) -> Result<FlightStatusRecord, FlightNumberError> {
        let (carrier_code, number) = split_flight_number(flight_number)
            .ok_or_else(|| FlightNumberError::Malformed(flight_number.trim().to_string()))?;

        let carrier = self
            .reference
            .carriers
            .get(&carrier_code)
            .ok_or_else(|| FlightNumberError::UnknownCarrier(carrier_code.clone()))?;

        let scheduled_departure = now + Duration::hours(rng.gen_range(1..=8));
        let scheduled_arrival = scheduled_departure + Duration::hours(rng.gen_range(2..=12));

        let status = FlightStatus::ALL[rng.gen_range(0..FlightStatus::ALL.len())];

        let arrival_airport = self
            .reference
            .status_arrivals
            .choose(rng)
            .unwrap_or(&self.reference.home_airport)
            .clone();

        let actual_departure = if status.has_departed() {
            Some(scheduled_departure + Duration::minutes(rng.gen_range(-30..=60)))
        } else {
            None
        };

        let actual_arrival = if status.has_arrived() {
            Some(scheduled_arrival + Duration::minutes(rng.gen_range(-30..=60)))
        } else {
            None
        };

        let gate = format!("B{}", rng.gen_range(1..=30));
        let terminal = TERMINALS[rng.gen_range(0..TERMINALS.len())];

        Ok(FlightStatusRecord {
            flight_number: format!("{}{}", carrier.code, number),
            airline: carrier.name.clone(),
            status,
            departure_airport: self.reference.home_airport.clone(),
            arrival_airport,
            scheduled_departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            gate: Some(gate),
            terminal: Some(terminal.to_string()),
        })
    }
}
