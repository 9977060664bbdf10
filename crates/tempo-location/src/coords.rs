//! Effective-coordinate precedence.

use tempo_districts::{Coordinates, District};

use crate::resolver::GeolocationState;

/// Lisbon; used when neither a selection nor a device fix exists.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates::new(38.7223, -9.1393);

/// Pick the coordinates to query weather for.
///
/// Precedence, first match wins: explicitly selected district, device
/// geolocation (both components present), fallback point. Pure function of
/// its inputs; callers re-invoke it after every selection or geolocation
/// change.
pub fn resolve_coordinates(
    selected: Option<&District>,
    geolocation: &GeolocationState,
) -> Coordinates {
    if let Some(district) = selected {
        return district.coordinates();
    }

    if let Some(coordinates) = geolocation.coordinates() {
        return coordinates;
    }

    FALLBACK_COORDINATES
}
