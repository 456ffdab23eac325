// src/site.rs
//
// One heritage site as read from a table row, plus its normalized point.

use std::fmt;

use crate::config::consts::{MIXED_KEYWORDS, NATURAL_KEYWORDS};
use crate::geo::{GeoPoint, ParseError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Cultural,
    Natural,
    Mixed,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cultural, Category::Natural, Category::Mixed];

    /// Keyword match on the type cell. Natural wins over Mixed; anything
    /// else is Cultural.
    pub fn from_cell(text: &str) -> Self {
        if NATURAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            Category::Natural
        } else if MIXED_KEYWORDS.iter().any(|k| text.contains(k)) {
            Category::Mixed
        } else {
            Category::Cultural
        }
    }

    /// Label used in the exported `Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cultural => "Culturel",
            Category::Natural => "Naturel",
            Category::Mixed => "Mixte",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Cultural => "#3498db",
            Category::Natural => "#27ae60",
            Category::Mixed => "#e67e22",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a record's point came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Location {
    Parsed(GeoPoint),
    /// Shared placeholder for sites with no single resolvable point.
    Imputed(GeoPoint),
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        match *self {
            Location::Parsed(p) | Location::Imputed(p) => p,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteRecord {
    pub name: String,
    pub region: String,
    pub inscription_year: Option<i32>,
    pub category: Category,
    pub raw_coordinate_text: String,
    /// Both coordinates or none; set during assembly.
    pub location: Option<Location>,
    /// Why the raw text did not parse, when it did not.
    pub coord_error: Option<ParseError>,
}

impl SiteRecord {
    pub fn new(
        name: String,
        region: String,
        inscription_year: Option<i32>,
        category: Category,
        raw_coordinate_text: String,
    ) -> Self {
        Self {
            name,
            region,
            inscription_year,
            category,
            raw_coordinate_text,
            location: None,
            coord_error: None,
        }
    }

    pub fn point(&self) -> Option<GeoPoint> {
        self.location.map(|l| l.point())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.point().map(|p| p.lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.point().map(|p| p.lon)
    }

    pub fn is_imputed(&self) -> bool {
        matches!(self.location, Some(Location::Imputed(_)))
    }

    pub fn decade(&self) -> Option<i32> {
        self.inscription_year.map(|y| y.div_euclid(10) * 10)
    }
}
