// tests/coords.rs
use unesco_scrape::geo::{self, GeoPoint, ParseError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn eiffel_tower_dms() {
    let p = geo::parse("48° 51′ 29″ N, 2° 17′ 40″ E").unwrap();
    assert!(close(p.lat, 48.858056) && close(p.lon, 2.294444), "{p}");
}

#[test]
fn plain_decimal_pair() {
    assert_eq!(geo::parse("48.858, 2.294"), Ok(GeoPoint::new(48.858, 2.294)));
}

#[test]
fn south_and_west_are_negative_north_and_east_are_not() {
    for raw in ["21° 7′ 0″ S, 55° 32′ 0″ E", "48° 0′ 0″ N, 4° 30′ 0″ W", "48° 0′ 0″ N, 4° 30′ 0″ O"] {
        let p = geo::parse(raw).unwrap();
        assert!(p.lat < 0.0 || p.lon < 0.0, "{raw} → {p}");
    }
    let p = geo::parse("0° 0′ 1″ N, 0° 0′ 1″ E").unwrap();
    assert!(p.lat >= 0.0 && p.lon >= 0.0);
}

#[test]
fn failures_never_panic() {
    assert_eq!(geo::parse(""), Err(ParseError::Empty));
    assert_eq!(geo::parse_opt(None), Err(ParseError::Empty));
    assert!(geo::parse("not coordinates at all").is_err());
    assert!(geo::parse(",").is_err());
    assert!(geo::parse("°′″, NSEW").is_err());
}

#[test]
fn fallback_point_reparses_as_itself() {
    let fallback = unesco_scrape::config::consts::DEFAULT_FALLBACK;
    assert_eq!(geo::parse(&fallback.to_string()), Ok(fallback));
}
