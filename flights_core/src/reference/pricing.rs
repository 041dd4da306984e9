//! Fare ranges keyed by route class and currency

use crate::models::{Currency, RouteClass};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smallest band floor a reference file may declare. Keeps every skewed,
/// cent-rounded fare strictly positive.
pub const MIN_BAND_PRICE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform draw over the inclusive range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// One row of the price table as written in a reference file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub route_class: RouteClass,
    pub currency: Currency,
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    ranges: HashMap<(RouteClass, Currency), PriceRange>,
}

impl PriceTable {
    pub fn new(bands: &[PriceBand]) -> Self {
        Self {
            ranges: bands
                .iter()
                .map(|band| ((band.route_class, band.currency), band.range()))
                .collect(),
        }
    }

    pub fn range_for(&self, route_class: RouteClass, currency: Currency) -> Option<PriceRange> {
        self.ranges.get(&(route_class, currency)).copied()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
