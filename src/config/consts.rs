// src/config/consts.rs
use crate::geo::GeoPoint;

// Net config
pub const SOURCE_URL: &str = "https://fr.wikipedia.org/wiki/Liste_du_patrimoine_mondial_en_France";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const TIMEOUT_SECS: u64 = 10;

// Table locating
pub const TABLE_CLASS: &str = "wikitable";
pub const TABLE_INDEX: usize = 1; // 0-based: the first wikitable is the summary

// Row extraction
pub const MIN_CELLS: usize = 6;
pub const COL_NAME: usize = 0;
pub const COL_REGION: usize = 1;
pub const COL_YEAR: usize = 2;
pub const COL_TYPE: usize = 4;
pub const COL_COORDS: usize = 5;
pub const COORD_LINK_SELECTOR: &str = "a.external.text";
pub const NATURAL_KEYWORDS: &[&str] = &["Naturel", "Natural"];
pub const MIXED_KEYWORDS: &[&str] = &["Mixte", "Mixed"];

// Imputation: representative point for serial / multi-location sites
pub const DEFAULT_FALLBACK: GeoPoint = GeoPoint { lat: 50.40, lon: 2.71 };

// Export
pub const DEFAULT_MAP_FILE: &str = "carte_unesco_france.html";
pub const DEFAULT_CSV_FILE: &str = "sites_unesco_france.csv";
pub const DEFAULT_TSV_FILE: &str = "sites_unesco_france.tsv";

// Map
pub const MAP_CENTER: GeoPoint = GeoPoint { lat: 46.6, lon: 2.5 };
pub const MAP_ZOOM: u8 = 6;
pub const MAP_TILES_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const MAP_TILES_ATTRIBUTION: &str =
    "&copy; OpenStreetMap contributors &copy; CARTO";
pub const MAP_TITLE: &str = "Sites du patrimoine mondial UNESCO en France";

// Charts
pub const TOP_REGIONS: usize = 10;
