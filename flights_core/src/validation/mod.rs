//! Validation framework for inbound requests
//!
//! Field rules are declared with `validator` derives; rules that depend on
//! the current date run through [`ContextValidatable`]. Every violation is
//! collected into a [`ValidationReport`] so callers see all problems at once.

pub mod rules;

pub use rules::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvalidAirportCode,
    InvalidDate,
    DateOutOfRange,
    InvalidDateOrder,
    InvalidPassengerCount,
    InvalidEnumValue,
    InvalidFlightNumber,
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::InvalidAirportCode => "invalid_airport_code",
            ViolationKind::InvalidDate => "invalid_date",
            ViolationKind::DateOutOfRange => "date_out_of_range",
            ViolationKind::InvalidDateOrder => "invalid_date_order",
            ViolationKind::InvalidPassengerCount => "invalid_passenger_count",
            ViolationKind::InvalidEnumValue => "invalid_enum_value",
            ViolationKind::InvalidFlightNumber => "invalid_flight_number",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "invalid_airport_code" => Some(ViolationKind::InvalidAirportCode),
            "invalid_date" => Some(ViolationKind::InvalidDate),
            "date_out_of_range" => Some(ViolationKind::DateOutOfRange),
            "invalid_date_order" => Some(ViolationKind::InvalidDateOrder),
            "invalid_passenger_count" | "range" => Some(ViolationKind::InvalidPassengerCount),
            "invalid_enum_value" => Some(ViolationKind::InvalidEnumValue),
            "invalid_flight_number" => Some(ViolationKind::InvalidFlightNumber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut report = Self::success();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let kind = ViolationKind::from_code(&error.code)
                    .unwrap_or(ViolationKind::InvalidEnumValue);
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Validation failed for field '{}'", field),
                };
                report.add(&field.to_string(), kind, message);
            }
        }

        report
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn add(&mut self, field: &str, kind: ViolationKind, message: impl Into<String>) {
        self.violations.push(Violation {
            field: field.to_string(),
            kind,
            message: message.into(),
        });
    }

    /// Orders violations by the position of their field in `fields`; unknown
    /// fields go last. Stable, so per-field insertion order is kept.
    pub fn sort_by_fields(&mut self, fields: &[&str]) {
        self.violations.sort_by_key(|violation| {
            fields
                .iter()
                .position(|field| *field == violation.field)
                .unwrap_or(fields.len())
        });
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|violation| violation.kind == kind)
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|violation| violation.message.clone())
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

pub trait Validatable {
    fn validate_comprehensive(&self) -> ValidationReport;
}

impl<T> Validatable for T
where
    T: Validate,
{
    fn validate_comprehensive(&self) -> ValidationReport {
        match self.validate() {
            Ok(_) => ValidationReport::success(),
            Err(errors) => ValidationReport::from_validation_errors(errors),
        }
    }
}

/// Facts about the moment of validation that rules may depend on.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub today: NaiveDate,
    pub booking_window_days: i64,
}

impl ValidationContext {
    pub fn new(today: NaiveDate, booking_window_days: i64) -> Self {
        Self {
            today,
            booking_window_days,
        }
    }

    pub fn latest_departure(&self) -> NaiveDate {
        self.today + chrono::Duration::days(self.booking_window_days)
    }
}

pub trait ContextValidatable {
    fn validate_with_context(&self, context: &ValidationContext) -> ValidationReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_violations() {
        let mut report = ValidationReport::success();
        assert!(report.is_valid());

        report.add("adults", ViolationKind::InvalidPassengerCount, "Adults must be between 1 and 9");
        report.add("origin", ViolationKind::InvalidAirportCode, "Origin must be a 3-letter IATA code");

        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 2);
        assert!(report.has(ViolationKind::InvalidAirportCode));
        assert!(!report.has(ViolationKind::DateOutOfRange));
    }

    #[test]
    fn test_sort_by_fields_is_stable() {
        let mut report = ValidationReport::success();
        report.add("currency", ViolationKind::InvalidEnumValue, "c");
        report.add("mystery", ViolationKind::InvalidEnumValue, "m");
        report.add("origin", ViolationKind::InvalidAirportCode, "o1");
        report.add("origin", ViolationKind::InvalidAirportCode, "o2");

        report.sort_by_fields(&["origin", "currency"]);

        assert_eq!(report.messages(), vec!["o1", "o2", "c", "m"]);
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in [
            ViolationKind::InvalidAirportCode,
            ViolationKind::InvalidDate,
            ViolationKind::DateOutOfRange,
            ViolationKind::InvalidDateOrder,
            ViolationKind::InvalidPassengerCount,
            ViolationKind::InvalidEnumValue,
            ViolationKind::InvalidFlightNumber,
        ] {
            assert_eq!(ViolationKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ViolationKind::from_code("range"), Some(ViolationKind::InvalidPassengerCount));
    }

    #[test]
    fn test_latest_departure() {
        let context = ValidationContext::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 365);
        assert_eq!(context.latest_departure(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }
}
