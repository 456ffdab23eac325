// src/geo/coords.rs
//
// Coordinate text → decimal degrees.
//
// The source cells are hand-written: DMS pairs ("48° 51′ 29″ N, 2° 17′ 40″ E"),
// decimal pairs ("48.858, 2.294"), serial sites with no single point, blanks.
// Parsing degrades per item and reports why it gave up; it never panics.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::GeoPoint;

/// deg [°|ws]+ min [′|'|ws]+ sec [″|"|ws]+ direction
static DMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([0-9]+)[°\s]+([0-9]+)[′'\s]+([0-9]+)[″"\s]+([NSEOW])"#).expect("static DMS regex")
});

/// Signed decimal inside one half; a bare integer is fine.
static HALF_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+\.?[0-9]*").expect("static decimal regex"));

/// Signed decimal over the whole string; needs at least two digits.
static PAIR_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+\.?[0-9]+").expect("static decimal regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no coordinate text")]
    Empty,
    #[error("latitude part has no usable value: `{0}`")]
    NoLatitude(String),
    #[error("longitude part has no usable value: `{0}`")]
    NoLongitude(String),
    #[error("fewer than two decimal numbers in `{0}`")]
    NoPair(String),
    #[error("not a number: `{0}`")]
    BadNumber(String),
}

/// Parse an optional cell value. `None` is the same failure as blank text.
pub fn parse_opt(raw: Option<&str>) -> Result<GeoPoint, ParseError> {
    parse(raw.unwrap_or(""))
}

/// Parse one coordinate string.
///
/// Exactly two comma-separated halves → each half is DMS, or else its first
/// decimal number (unsigned by direction). A half with neither fails the
/// whole parse. Any other shape → first two decimal numbers of the string.
pub fn parse(raw: &str) -> Result<GeoPoint, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let halves: Vec<&str> = raw.split(',').collect();
    if let [lat_part, lon_part] = halves.as_slice() {
        let lat_part = lat_part.trim();
        let lon_part = lon_part.trim();

        let lat = parse_half(lat_part)?
            .ok_or_else(|| ParseError::NoLatitude(s!(lat_part)))?;
        let lon = parse_half(lon_part)?
            .ok_or_else(|| ParseError::NoLongitude(s!(lon_part)))?;
        return Ok(GeoPoint::new(lat, lon));
    }

    let mut numbers = PAIR_DECIMAL.find_iter(raw).map(|m| to_f64(m.as_str()));
    match (numbers.next(), numbers.next()) {
        (Some(lat), Some(lon)) => Ok(GeoPoint::new(lat?, lon?)),
        _ => Err(ParseError::NoPair(s!(raw.trim()))),
    }
}

/// DMS first, then the first plain decimal. `Ok(None)` means nothing usable.
fn parse_half(part: &str) -> Result<Option<f64>, ParseError> {
    if let Some(caps) = DMS.captures(part) {
        let deg = to_f64(&caps[1])?;
        let min = to_f64(&caps[2])?;
        let sec = to_f64(&caps[3])?;
        let dir = caps[4].chars().next().unwrap_or('N');
        return Ok(Some(dms_to_decimal(deg, min, sec, dir)));
    }
    HALF_DECIMAL
        .find(part)
        .map(|m| to_f64(m.as_str()))
        .transpose()
}

/// Degrees/minutes/seconds → decimal degrees. South and West (`S`, `O`,
/// `W`, any case) are negative.
pub fn dms_to_decimal(deg: f64, min: f64, sec: f64, dir: char) -> f64 {
    let dd = deg + min / 60.0 + sec / 3600.0;
    match dir.to_ascii_uppercase() {
        'S' | 'O' | 'W' => -dd,
        _ => dd,
    }
}

// Tokens are ASCII `[0-9]` runs; the error path is kept for the `f64` parser.
fn to_f64(tok: &str) -> Result<f64, ParseError> {
    tok.parse::<f64>().map_err(|_| ParseError::BadNumber(s!(tok)))
}
