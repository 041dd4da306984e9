use crate::models::{AirportCode, Route, RouteClass};
use crate::reference::AirportDirectory;

/// Labels an itinerary by comparing the countries of its two airports.
pub struct RouteClassifier<'a> {
    airports: &'a AirportDirectory,
}

impl<'a> RouteClassifier<'a> {
    pub fn new(airports: &'a AirportDirectory) -> Self {
        Self { airports }
    }

    /// `Domestic` only when both airports are known and share a country.
    /// Unknown airports never match anything, including each other.
    pub fn classify(&self, origin: &AirportCode, destination: &AirportCode) -> RouteClass {
        match (
            self.airports.country_of(origin),
            self.airports.country_of(destination),
        ) {
            (Some(from), Some(to)) if from == to => RouteClass::Domestic,
            _ => RouteClass::International,
        }
    }

    pub fn route(&self, origin: AirportCode, destination: AirportCode) -> Route {
        let class = self.classify(&origin, &destination);
        Route {
            origin,
            destination,
            class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;

    fn code(raw: &str) -> AirportCode {
        AirportCode::parse(raw).unwrap()
    }

    #[test]
    fn test_same_country_is_domestic() {
        let data = ReferenceData::builtin();
        let classifier = RouteClassifier::new(&data.airports);

        assert_eq!(classifier.classify(&code("YYZ"), &code("YVR")), RouteClass::Domestic);
        assert_eq!(classifier.classify(&code("JFK"), &code("LAX")), RouteClass::Domestic);
    }

    #[test]
    fn test_different_country_is_international() {
        let data = ReferenceData::builtin();
        let classifier = RouteClassifier::new(&data.airports);

        assert_eq!(classifier.classify(&code("YYZ"), &code("LHR")), RouteClass::International);
        assert_eq!(classifier.classify(&code("CDG"), &code("FCO")), RouteClass::International);
    }

    #[test]
    fn test_unknown_airports_degrade_to_international() {
        let data = ReferenceData::builtin();
        let classifier = RouteClassifier::new(&data.airports);

        assert_eq!(classifier.classify(&code("YYZ"), &code("SFO")), RouteClass::International);
        assert_eq!(classifier.classify(&code("SFO"), &code("ORD")), RouteClass::International);
    }

    #[test]
    fn test_route_keeps_codes() {
        let data = ReferenceData::builtin();
        let route = RouteClassifier::new(&data.airports).route(code("YUL"), code("YVR"));

        assert_eq!(route.origin, code("YUL"));
        assert_eq!(route.destination, code("YVR"));
        assert_eq!(route.class, RouteClass::Domestic);
    }
}
