use super::{AirportCode, Currency};
use serde::{Deserialize, Serialize};

/// Curated destination shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularDestination {
    pub destination: AirportCode,
    pub city_name: String,
    pub country: String,
    pub price: f64,
    pub currency: Currency,
    pub airline: String,
    pub image_url: Option<String>,
}
