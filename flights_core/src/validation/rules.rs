//! Validation rules and custom validators

use crate::models::{AirportCode, CabinClass, Currency};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

use super::ViolationKind;

lazy_static! {
    static ref ISO_DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

    static ref FLIGHT_NUMBER_REGEX: Regex = Regex::new(r"^([A-Z0-9]{2})(\d{1,4})$").unwrap();
}

fn violation(kind: ViolationKind, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(kind.code());
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_iata_code(code: &str) -> Result<(), ValidationError> {
    if AirportCode::parse(code).is_none() {
        return Err(violation(
            ViolationKind::InvalidAirportCode,
            "IATA code must be 3 letters",
        ));
    }
    Ok(())
}

pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if currency.parse::<Currency>().is_err() {
        return Err(violation(
            ViolationKind::InvalidEnumValue,
            "Currency must be one of USD, CAD, EUR, GBP",
        ));
    }
    Ok(())
}

pub fn validate_cabin_class(cabin: &str) -> Result<(), ValidationError> {
    if cabin.parse::<CabinClass>().is_err() {
        return Err(violation(
            ViolationKind::InvalidEnumValue,
            "Cabin class must be one of Economy, Business, First",
        ));
    }
    Ok(())
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if !ISO_DATE_REGEX.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Splits a flight number such as `ac123` into (`AC`, `123`).
pub fn split_flight_number(raw: &str) -> Option<(String, String)> {
    let normalized = raw.trim().to_ascii_uppercase();
    let captures = FLIGHT_NUMBER_REGEX.captures(&normalized)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}
