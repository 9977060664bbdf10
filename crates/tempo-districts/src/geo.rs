//! Great-circle distance and nearest-district lookup.

use serde::{Deserialize, Serialize};

use crate::catalog::District;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A map click further than this from every district resolves to no match.
pub const NEAREST_MATCH_MAX_KM: f64 = 50.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Find the district nearest to `point`, if any lies within
/// [`NEAREST_MATCH_MAX_KM`].
///
/// Linear scan in declared catalog order; only a strictly smaller distance
/// replaces the current best, so equidistant candidates resolve to the
/// first one seen.
pub fn nearest_district<'a>(point: Coordinates, districts: &'a [District]) -> Option<&'a District> {
    let mut nearest: Option<&District> = None;
    let mut min_distance = f64::INFINITY;

    for district in districts {
        let distance = haversine_km(point, district.coordinates());
        if distance < min_distance && distance < NEAREST_MATCH_MAX_KM {
            min_distance = distance;
            nearest = Some(district);
        }
    }

    nearest
}
