//! Airport identifiers and directory entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-letter IATA airport code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Accepts exactly three ASCII letters in any case; surrounding
    /// whitespace is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(raw.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AirportCode::parse(&value).ok_or_else(|| format!("'{}' is not a 3-letter IATA code", value))
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: AirportCode,
    pub city: String,
    pub country: String,
}
