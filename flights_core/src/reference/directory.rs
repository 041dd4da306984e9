//! Airport and carrier lookup tables

use crate::models::{Airport, AirportCode};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: HashMap<AirportCode, Airport>,
}

impl AirportDirectory {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports: airports
                .into_iter()
                .map(|airport| (airport.code.clone(), airport))
                .collect(),
        }
    }

    pub fn get(&self, code: &AirportCode) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn country_of(&self, code: &AirportCode) -> Option<&str> {
        self.get(code).map(|airport| airport.country.as_str())
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    pub code: String,
    pub name: String,
}

impl Carrier {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Carriers in declaration order; the order is what uniform selection draws from.
#[derive(Debug, Clone, Default)]
pub struct CarrierDirectory {
    carriers: Vec<Carrier>,
}

impl CarrierDirectory {
    pub fn new(carriers: Vec<Carrier>) -> Self {
        Self { carriers }
    }

    /// Case-insensitive lookup by two-character carrier code.
    pub fn get(&self, code: &str) -> Option<&Carrier> {
        self.carriers
            .iter()
            .find(|carrier| carrier.code.eq_ignore_ascii_case(code))
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Carrier> {
        self.carriers.choose(rng)
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn airport(code: &str, city: &str, country: &str) -> Airport {
        Airport {
            code: AirportCode::parse(code).unwrap(),
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_airport_lookup() {
        let directory = AirportDirectory::new(vec![
            airport("YYZ", "Toronto", "Canada"),
            airport("LHR", "London", "United Kingdom"),
        ]);

        let yyz = AirportCode::parse("YYZ").unwrap();
        assert_eq!(directory.country_of(&yyz), Some("Canada"));
        assert!(directory.country_of(&AirportCode::parse("SFO").unwrap()).is_none());
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_carrier_lookup_ignores_case() {
        let carriers = CarrierDirectory::new(vec![Carrier::new("AC", "Air Canada")]);
        assert_eq!(carriers.get("ac").unwrap().name, "Air Canada");
        assert!(carriers.get("ZZ").is_none());
    }

    #[test]
    fn test_choose_from_empty_directory() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(CarrierDirectory::default().choose(&mut rng).is_none());
    }
}
