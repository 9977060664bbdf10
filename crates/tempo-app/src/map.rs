//! Map view state and tile addressing.

use tempo_districts::{nearest_district, Coordinates, District};

/// Initial map framing over mainland Portugal.
pub const PORTUGAL_CENTER: Coordinates = Coordinates::new(39.5, -8.0);
pub const DEFAULT_ZOOM: u8 = 7;
pub const MIN_ZOOM: u8 = 6;
pub const MAX_ZOOM: u8 = 12;

/// Zoom applied when focusing a selected district / the user's position.
const DISTRICT_FOCUS_ZOOM: u8 = 9;
const USER_FOCUS_ZOOM: u8 = 11;

const TILE_SUBDOMAINS: [char; 3] = ['a', 'b', 'c'];

/// Tile URL for a slippy-map coordinate, round-robining the subdomain so
/// neighbouring tiles spread across hosts.
pub fn tile_url(x: u32, y: u32, zoom: u8) -> String {
    let subdomain = TILE_SUBDOMAINS[((x + y + u32::from(zoom)) % 3) as usize];
    format!("https://{subdomain}.tile.openstreetmap.org/{zoom}/{x}/{y}.png")
}

/// Center/zoom state of the map pane.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self { center: PORTUGAL_CENTER, zoom: DEFAULT_ZOOM }
    }
}

impl MapView {
    /// Pan/zoom from a user gesture, clamped to the zoom bounds.
    pub fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Frame a selected district.
    pub fn focus_district(&mut self, district: &District) {
        self.center = district.coordinates();
        self.zoom = DISTRICT_FOCUS_ZOOM;
    }

    /// Frame the user's resolved position.
    pub fn center_on_user(&mut self, position: Coordinates) {
        self.center = position;
        self.zoom = USER_FOCUS_ZOOM;
    }

    /// Resolve a click on the map to the nearest catalogued district.
    pub fn click_target<'a>(
        &self,
        point: Coordinates,
        districts: &'a [District],
    ) -> Option<&'a District> {
        nearest_district(point, districts)
    }
}
