//! Immutable reference tables: airports, carriers, fares and curated content
//!
//! Built once at startup and shared read-only by every request. The built-in
//! tables can be replaced wholesale by a YAML or TOML file.

mod builtin;
pub mod directory;
pub mod pricing;

pub use directory::{AirportDirectory, Carrier, CarrierDirectory};
pub use pricing::{PriceBand, PriceRange, PriceTable, MIN_BAND_PRICE};

use crate::models::{Airport, AirportCode, Currency, PopularDestination, RouteClass};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML reference data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML reference data: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported reference data format: {0}")]
    UnsupportedFormat(String),

    #[error("Inconsistent reference data: {0}")]
    Inconsistent(String),
}

/// On-disk layout of the reference tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataFile {
    pub airports: Vec<Airport>,
    pub carriers: Vec<Carrier>,
    pub price_ranges: Vec<PriceBand>,
    pub aircraft: Vec<String>,
    pub popular_destinations: Vec<PopularDestination>,
    pub home_airport: AirportCode,
    pub status_arrivals: Vec<AirportCode>,
}

impl ReferenceDataFile {
    pub fn check(&self) -> Result<(), ReferenceDataError> {
        if self.carriers.is_empty() {
            return Err(ReferenceDataError::Inconsistent(
                "carrier table is empty".to_string(),
            ));
        }

        for carrier in &self.carriers {
            if carrier.code.len() != 2 || !carrier.code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ReferenceDataError::Inconsistent(format!(
                    "carrier code '{}' must be 2 alphanumeric characters",
                    carrier.code
                )));
            }
        }

        if !self
            .airports
            .iter()
            .any(|airport| airport.code == self.home_airport)
        {
            return Err(ReferenceDataError::Inconsistent(format!(
                "home airport {} is not in the airport table",
                self.home_airport
            )));
        }

        if self.aircraft.is_empty() {
            return Err(ReferenceDataError::Inconsistent(
                "aircraft list is empty".to_string(),
            ));
        }

        if self.status_arrivals.is_empty() {
            return Err(ReferenceDataError::Inconsistent(
                "status arrival list is empty".to_string(),
            ));
        }

        for band in &self.price_ranges {
            let range = band.range();
            if !range.is_well_formed() || range.min < MIN_BAND_PRICE {
                return Err(ReferenceDataError::Inconsistent(format!(
                    "price range for {} {} must satisfy {} <= min <= max",
                    band.route_class, band.currency, MIN_BAND_PRICE
                )));
            }
        }

        for destination in &self.popular_destinations {
            if !self
                .carriers
                .iter()
                .any(|carrier| carrier.code.eq_ignore_ascii_case(&destination.airline))
            {
                return Err(ReferenceDataError::Inconsistent(format!(
                    "popular destination {} uses unknown airline '{}'",
                    destination.destination, destination.airline
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub airports: AirportDirectory,
    pub carriers: CarrierDirectory,
    pub prices: PriceTable,
    pub aircraft: Vec<String>,
    pub popular_destinations: Vec<PopularDestination>,
    pub home_airport: AirportCode,
    pub status_arrivals: Vec<AirportCode>,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self::assemble(builtin::tables())
    }

    pub fn from_tables(tables: ReferenceDataFile) -> Result<Self, ReferenceDataError> {
        tables.check()?;
        Ok(Self::assemble(tables))
    }

    /// Loads tables from `.yaml`/`.yml` or `.toml`, picked by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let tables: ReferenceDataFile = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            "toml" => toml::from_str(&contents)?,
            other => {
                return Err(ReferenceDataError::UnsupportedFormat(format!(
                    "'{}' ({})",
                    path.display(),
                    if other.is_empty() { "no extension" } else { other }
                )))
            }
        };

        Self::from_tables(tables)
    }

    pub fn price_range(&self, route_class: RouteClass, currency: Currency) -> Option<PriceRange> {
        self.prices.range_for(route_class, currency)
    }

    fn assemble(tables: ReferenceDataFile) -> Self {
        Self {
            airports: AirportDirectory::new(tables.airports),
            carriers: CarrierDirectory::new(tables.carriers),
            prices: PriceTable::new(&tables.price_ranges),
            aircraft: tables.aircraft,
            popular_destinations: tables.popular_destinations,
            home_airport: tables.home_airport,
            status_arrivals: tables.status_arrivals,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert!(builtin::tables().check().is_ok());

        let data = ReferenceData::builtin();
        assert_eq!(data.airports.len(), 12);
        assert_eq!(data.carriers.len(), 10);
        assert_eq!(data.popular_destinations.len(), 6);
        assert_eq!(data.home_airport.as_str(), "YYZ");
    }

    #[test]
    fn test_builtin_prices_cover_every_currency() {
        let data = ReferenceData::builtin();
        for currency in Currency::ALL {
            for route_class in [RouteClass::Domestic, RouteClass::International] {
                assert!(
                    data.price_range(route_class, currency).is_some(),
                    "missing {route_class} {currency}"
                );
            }
        }
        assert_eq!(
            data.price_range(RouteClass::Domestic, Currency::Cad),
            Some(PriceRange::new(200.0, 800.0))
        );
        assert_eq!(
            data.price_range(RouteClass::International, Currency::Cad),
            Some(PriceRange::new(600.0, 2500.0))
        );
    }

    #[test]
    fn test_check_rejects_unknown_destination_airline() {
        let mut tables = builtin::tables();
        tables.popular_destinations[0].airline = "ZZ".to_string();
        assert!(matches!(
            ReferenceData::from_tables(tables),
            Err(ReferenceDataError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_check_rejects_inverted_price_range() {
        let mut tables = builtin::tables();
        tables.price_ranges[0].min = 900.0;
        assert!(ReferenceData::from_tables(tables).is_err());
    }

    #[test]
    fn test_check_rejects_fractional_price_floor() {
        let mut tables = builtin::tables();
        tables.price_ranges[0].min = 0.004;
        tables.price_ranges[0].max = 0.01;
        assert!(matches!(
            ReferenceData::from_tables(tables),
            Err(ReferenceDataError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_check_rejects_bad_carrier_codes() {
        for code in ["A", "ACX", "A-"] {
            let mut tables = builtin::tables();
            tables.carriers.push(Carrier::new(code, "Broken Air"));
            let result = ReferenceData::from_tables(tables);
            assert!(
                matches!(result, Err(ReferenceDataError::Inconsistent(_))),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_check_rejects_unknown_home_airport() {
        let mut tables = builtin::tables();
        tables.home_airport = AirportCode::parse("SFO").unwrap();
        assert!(matches!(
            ReferenceData::from_tables(tables),
            Err(ReferenceDataError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let yaml = serde_yaml::to_string(&builtin::tables()).unwrap();
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let data = ReferenceData::from_file(file.path()).unwrap();
        assert_eq!(data.carriers.len(), 10);
        assert_eq!(data.status_arrivals.len(), 4);
    }

    #[test]
    fn test_toml_file_with_custom_tables() {
        let toml_source = r#"
            aircraft = ["Embraer E175"]
            home_airport = "YUL"
            status_arrivals = ["YYZ"]

            [[airports]]
            code = "YUL"
            city = "Montreal"
            country = "Canada"

            [[airports]]
            code = "YYZ"
            city = "Toronto"
            country = "Canada"

            [[carriers]]
            code = "PD"
            name = "Porter Airlines"

            [[price_ranges]]
            route_class = "domestic"
            currency = "CAD"
            min = 99.0
            max = 299.0

            [[popular_destinations]]
            destination = "YYZ"
            city_name = "Toronto"
            country = "Canada"
            price = 129.0
            currency = "CAD"
            airline = "PD"
        "#;
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(toml_source.as_bytes()).unwrap();

        let data = ReferenceData::from_file(file.path()).unwrap();
        assert_eq!(data.home_airport.as_str(), "YUL");
        assert_eq!(data.aircraft, vec!["Embraer E175".to_string()]);
        assert!(data.price_range(RouteClass::International, Currency::Cad).is_none());
        assert!(data.popular_destinations[0].image_url.is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        assert!(matches!(
            ReferenceData::from_file(file.path()),
            Err(ReferenceDataError::UnsupportedFormat(_))
        ));
    }
}
