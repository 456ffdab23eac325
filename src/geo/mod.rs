// src/geo/mod.rs
//! Geographic primitives: the decimal-degree point, the coordinate text
//! parser (DMS and decimal notations) and territory bounds.

pub mod bounds;
pub mod coords;

pub use coords::{dms_to_decimal, parse, parse_opt, ParseError};

use std::fmt;

/// A point in decimal degrees. Latitude first, as written on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Physical bounds check. Informational only: parsed values are never
    /// rejected for being out of range.
    pub fn is_physical(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// "lat, lon" in shortest round-trip form. Feeding this back to
/// [`parse`] yields the same point.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
