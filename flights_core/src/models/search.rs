//! Flight search request models with validation

use super::{AirportCode, CabinClass, Currency};
use crate::validation::{
    parse_iso_date, validate_cabin_class, validate_currency, validate_iata_code,
    ContextValidatable, Validatable, ValidationContext, ValidationReport, ViolationKind,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field order used when reporting violations.
const FIELD_ORDER: [&str; 9] = [
    "origin",
    "destination",
    "departure_date",
    "return_date",
    "adults",
    "children",
    "infants",
    "currency",
    "trip_class",
];

/// Search body as received on the wire.
///
/// Every field is lenient (plain strings, wide integers, defaults) so that a
/// bad value surfaces as a collected violation rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FlightSearchPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_iata_code", message = "Origin must be a 3-letter IATA code"))]
    pub origin: String,

    #[serde(default)]
    #[validate(custom(function = "validate_iata_code", message = "Destination must be a 3-letter IATA code"))]
    pub destination: String,

    #[serde(default)]
    pub departure_date: String,

    #[serde(default)]
    pub return_date: Option<String>,

    #[serde(default = "default_adults")]
    #[validate(range(min = 1, max = 9, code = "invalid_passenger_count", message = "Adults must be between 1 and 9"))]
    pub adults: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 8, code = "invalid_passenger_count", message = "Children must be between 0 and 8"))]
    pub children: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 2, code = "invalid_passenger_count", message = "Infants must be between 0 and 2"))]
    pub infants: i64,

    #[serde(default = "default_currency")]
    #[validate(custom(function = "validate_currency"))]
    pub currency: String,

    #[serde(default = "default_trip_class")]
    #[validate(custom(function = "validate_cabin_class"))]
    pub trip_class: String,

    #[serde(default)]
    pub direct_flights_only: bool,
}

fn default_adults() -> i64 {
    1
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_trip_class() -> String {
    CabinClass::default().to_string()
}

impl ContextValidatable for FlightSearchPayload {
    fn validate_with_context(&self, context: &ValidationContext) -> ValidationReport {
        let mut result = self.validate_comprehensive();

        let departure = if self.departure_date.trim().is_empty() {
            result.add(
                "departure_date",
                ViolationKind::InvalidDate,
                "Departure date is required",
            );
            None
        } else {
            let parsed = parse_iso_date(&self.departure_date);
            if parsed.is_none() {
                result.add(
                    "departure_date",
                    ViolationKind::InvalidDate,
                    "Departure date must be a valid date in YYYY-MM-DD format",
                );
            }
            parsed
        };

        if let Some(departure) = departure {
            if departure < context.today {
                result.add(
                    "departure_date",
                    ViolationKind::DateOutOfRange,
                    "Departure date cannot be in the past",
                );
            } else if departure > context.latest_departure() {
                result.add(
                    "departure_date",
                    ViolationKind::DateOutOfRange,
                    format!(
                        "Departure date cannot be more than {} days in the future",
                        context.booking_window_days
                    ),
                );
            }
        }

        if let Some(raw_return) = &self.return_date {
            match parse_iso_date(raw_return) {
                None => result.add(
                    "return_date",
                    ViolationKind::InvalidDate,
                    "Return date must be a valid date in YYYY-MM-DD format",
                ),
                Some(return_date) => {
                    if matches!(departure, Some(departure) if return_date <= departure) {
                        result.add(
                            "return_date",
                            ViolationKind::InvalidDateOrder,
                            "Return date must be after departure date",
                        );
                    }
                }
            }
        }

        result.sort_by_fields(&FIELD_ORDER);
        result
    }
}

impl FlightSearchPayload {
    /// Validates every field and, when all pass, produces the normalized request.
    pub fn into_search_request(
        self,
        context: &ValidationContext,
    ) -> Result<SearchRequest, ValidationReport> {
        let report = self.validate_with_context(context);
        if !report.is_valid() {
            return Err(report);
        }

        self.normalize().ok_or(report)
    }

    fn normalize(&self) -> Option<SearchRequest> {
        let return_date = match &self.return_date {
            Some(raw) => Some(parse_iso_date(raw)?),
            None => None,
        };

        Some(SearchRequest {
            origin: AirportCode::parse(&self.origin)?,
            destination: AirportCode::parse(&self.destination)?,
            departure_date: parse_iso_date(&self.departure_date)?,
            return_date,
            adults: u8::try_from(self.adults).ok()?,
            children: u8::try_from(self.children).ok()?,
            infants: u8::try_from(self.infants).ok()?,
            currency: self.currency.parse().ok()?,
            trip_class: self.trip_class.parse().ok()?,
            direct_flights_only: self.direct_flights_only,
        })
    }
}

/// Normalized, validated search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: u8,
    pub children: u8,
    pub infants: u8,
    pub currency: Currency,
    pub trip_class: CabinClass,
    pub direct_flights_only: bool,
}

impl SearchRequest {
    pub fn total_passengers(&self) -> u8 {
        self.adults + self.children + self.infants
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn context() -> ValidationContext {
        ValidationContext::new(today(), 365)
    }

    fn payload(json: serde_json::Value) -> FlightSearchPayload {
        serde_json::from_value(json).unwrap()
    }

    fn valid_json() -> serde_json::Value {
        serde_json::json!({
            "origin": "yyz",
            "destination": "yvr",
            "departure_date": "2026-07-15",
        })
    }

    #[test]
    fn test_valid_request_is_normalized_with_defaults() {
        let request = payload(valid_json()).into_search_request(&context()).unwrap();

        assert_eq!(request.origin.as_str(), "YYZ");
        assert_eq!(request.destination.as_str(), "YVR");
        assert_eq!(request.departure_date, NaiveDate::from_ymd_opt(2026, 7, 15).unwrap());
        assert_eq!(request.adults, 1);
        assert_eq!(request.children, 0);
        assert_eq!(request.infants, 0);
        assert_eq!(request.currency, Currency::Cad);
        assert_eq!(request.trip_class, CabinClass::Economy);
        assert!(!request.direct_flights_only);
        assert!(!request.is_round_trip());
    }

    #[test]
    fn test_departure_yesterday_is_out_of_range() {
        let yesterday = today() - Duration::days(1);
        let mut json = valid_json();
        json["departure_date"] = serde_json::json!(yesterday.format("%Y-%m-%d").to_string());

        let report = payload(json).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::DateOutOfRange));
    }

    #[test]
    fn test_departure_window_edges() {
        let mut json = valid_json();
        json["departure_date"] = serde_json::json!("2026-06-01");
        assert!(payload(json.clone()).into_search_request(&context()).is_ok());

        json["departure_date"] = serde_json::json!("2027-06-01");
        assert!(payload(json.clone()).into_search_request(&context()).is_ok());

        json["departure_date"] = serde_json::json!("2027-06-02");
        let report = payload(json).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::DateOutOfRange));
    }

    #[test]
    fn test_return_date_must_follow_departure() {
        let mut json = valid_json();
        json["return_date"] = serde_json::json!("2026-07-15");
        let report = payload(json.clone()).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::InvalidDateOrder));

        json["return_date"] = serde_json::json!("2026-07-10");
        let report = payload(json.clone()).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::InvalidDateOrder));

        json["return_date"] = serde_json::json!("2026-07-16");
        let request = payload(json).into_search_request(&context()).unwrap();
        assert!(request.is_round_trip());
    }

    #[test]
    fn test_bad_airport_codes() {
        for bad in ["YY", "123", "YYZZ", ""] {
            let mut json = valid_json();
            json["origin"] = serde_json::json!(bad);
            let report = payload(json).into_search_request(&context()).unwrap_err();
            assert!(report.has(ViolationKind::InvalidAirportCode), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_padded_airport_codes_are_rejected() {
        for padded in [" YYZ", "YYZ ", "  yyz "] {
            let mut json = valid_json();
            json["destination"] = serde_json::json!(padded);
            let report = payload(json).into_search_request(&context()).unwrap_err();
            assert!(report.has(ViolationKind::InvalidAirportCode), "{padded:?} should be rejected");
        }
    }

    #[test]
    fn test_padded_dates_are_rejected() {
        let mut json = valid_json();
        json["departure_date"] = serde_json::json!(" 2026-07-15 ");
        let report = payload(json.clone()).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::InvalidDate));

        json["departure_date"] = serde_json::json!("2026-07-15");
        json["return_date"] = serde_json::json!("2026-07-20 ");
        let report = payload(json).into_search_request(&context()).unwrap_err();
        assert_eq!(report.violations()[0].field, "return_date");
        assert!(report.has(ViolationKind::InvalidDate));
    }

    #[test]
    fn test_passenger_bounds() {
        let cases = [
            ("adults", 0),
            ("adults", 10),
            ("children", -1),
            ("children", 9),
            ("infants", 3),
        ];
        for (field, value) in cases {
            let mut json = valid_json();
            json[field] = serde_json::json!(value);
            let report = payload(json).into_search_request(&context()).unwrap_err();
            assert!(report.has(ViolationKind::InvalidPassengerCount), "{field}={value}");
        }

        let mut json = valid_json();
        json["adults"] = serde_json::json!(9);
        json["children"] = serde_json::json!(8);
        json["infants"] = serde_json::json!(2);
        let request = payload(json).into_search_request(&context()).unwrap();
        assert_eq!(request.total_passengers(), 19);
    }

    #[test]
    fn test_unknown_enum_values() {
        let mut json = valid_json();
        json["currency"] = serde_json::json!("JPY");
        json["trip_class"] = serde_json::json!("Premium");
        let report = payload(json).into_search_request(&context()).unwrap_err();

        let enum_violations = report
            .violations()
            .iter()
            .filter(|violation| violation.kind == ViolationKind::InvalidEnumValue)
            .count();
        assert_eq!(enum_violations, 2);
    }

    #[test]
    fn test_all_violations_are_reported_in_field_order() {
        let json = serde_json::json!({
            "origin": "Y1Z",
            "destination": "LHR",
            "departure_date": "2020-01-01",
            "return_date": "2019-12-31",
            "adults": 0,
            "currency": "XXX",
        });
        let report = payload(json).into_search_request(&context()).unwrap_err();

        let fields: Vec<&str> = report
            .violations()
            .iter()
            .map(|violation| violation.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec!["origin", "departure_date", "return_date", "adults", "currency"]
        );
    }

    #[test]
    fn test_missing_departure_date() {
        let json = serde_json::json!({ "origin": "YYZ", "destination": "LHR" });
        let report = payload(json).into_search_request(&context()).unwrap_err();
        assert!(report.has(ViolationKind::InvalidDate));
    }
}
