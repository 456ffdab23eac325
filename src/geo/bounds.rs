// src/geo/bounds.rs
//
// Rough bounding boxes for metropolitan France and the overseas territories
// that hold listed sites. Used by the map to drop markers that landed
// somewhere implausible (typically a malformed DMS cell).

use super::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub name: &'static str,
    pub lat: (f64, f64),
    pub lon: (f64, f64),
}

impl Zone {
    pub fn contains(&self, p: &GeoPoint) -> bool {
        (self.lat.0..=self.lat.1).contains(&p.lat) && (self.lon.0..=self.lon.1).contains(&p.lon)
    }
}

pub const FRANCE_ZONES: &[Zone] = &[
    Zone { name: "France métropolitaine", lat: (41.0, 51.0), lon: (-5.0, 10.0) },
    Zone { name: "La Réunion", lat: (-25.0, -20.0), lon: (55.0, 60.0) },
    Zone { name: "Guadeloupe / Martinique", lat: (14.0, 18.0), lon: (-63.0, -60.0) },
    Zone { name: "Nouvelle-Calédonie", lat: (-23.0, -21.0), lon: (164.0, 168.0) },
    Zone { name: "Polynésie française", lat: (-18.0, -8.0), lon: (-141.0, -138.0) },
    Zone { name: "Terres australes", lat: (-50.0, -37.0), lon: (50.0, 78.0) },
];

/// Zone holding the point, if any.
pub fn france_zone(p: &GeoPoint) -> Option<&'static Zone> {
    FRANCE_ZONES.iter().find(|z| z.contains(p))
}

pub fn in_france(p: &GeoPoint) -> bool {
    france_zone(p).is_some()
}
