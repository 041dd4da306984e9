use super::AirportCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteClass {
    Domestic,
    International,
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteClass::Domestic => f.write_str("domestic"),
            RouteClass::International => f.write_str("international"),
        }
    }
}

/// An origin/destination pair together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub class: RouteClass,
}
