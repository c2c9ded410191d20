//! Coordinates embedded in map links and great-circle distances between them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const MAPS_BASE_URL: &str = "https://maps.google.com/?q=";

// Both halves need a decimal point, so `q=40,-73` does not match.
static MAP_QUERY_COORDINATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"q=(-?[0-9]+\.[0-9]+),\s*(-?[0-9]+\.[0-9]+)")
        .expect("map query pattern should compile")
});

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Pulls the `q=<lat>,<lng>` pair out of a map link.
///
/// The pattern may appear anywhere in the string. Anything that does not carry
/// it, including the empty string, yields `None`.
pub fn extract_coordinates(location: &str) -> Option<Coordinates> {
    let captures = MAP_QUERY_COORDINATES.captures(location)?;
    let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;
    // Very long digit runs overflow to infinity.
    (latitude.is_finite() && longitude.is_finite())
        .then(|| Coordinates::new(latitude, longitude))
}

/// Haversine distance in kilometers on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// Inputs are not range checked; out-of-range degrees still produce a number.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Builds the map link stored in `location` from the raw latitude and longitude text.
pub fn maps_link(latitude: &str, longitude: &str) -> String {
    format!("{MAPS_BASE_URL}{latitude},{longitude}")
}
