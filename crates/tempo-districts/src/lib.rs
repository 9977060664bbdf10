//! District reference data for Tempo
//!
//! Static catalog of Portugal's 18 mainland districts grouped into five
//! regions, plus the geospatial lookup that maps an arbitrary coordinate
//! to the nearest catalogued district.

pub mod catalog;
pub mod geo;

pub use catalog::{find_district, find_region, District, Region, PORTUGAL_DISTRICTS, REGIONS};
pub use geo::{
    haversine_km, nearest_district, Coordinates, EARTH_RADIUS_KM, NEAREST_MATCH_MAX_KM,
};
