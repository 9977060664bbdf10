//! Compiled-in district catalog.
//!
//! Reference data only; created once at startup and never mutated. The
//! declared order of `PORTUGAL_DISTRICTS` is load-bearing: it is the
//! iteration order for the nearest-match tie-break.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// One of Portugal's administrative districts.
///
/// Serializes with the storage field names used by the favorites value
/// (`nameEn` rather than `name_en`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl District {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A region grouping of district ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

fn district(
    id: &str,
    name: &str,
    name_en: &str,
    latitude: f64,
    longitude: f64,
    region: &str,
) -> District {
    District {
        id: id.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
        latitude,
        longitude,
        region: region.to_string(),
        area: None,
    }
}

pub static PORTUGAL_DISTRICTS: Lazy<Vec<District>> = Lazy::new(|| {
    vec![
        district("AV", "Aveiro", "Aveiro", 40.6405, -8.6538, "Centro"),
        district("BE", "Beja", "Beja", 38.0151, -7.8631, "Alentejo"),
        district("BR", "Braga", "Braga", 41.5518, -8.4229, "Norte"),
        district("BA", "Bragança", "Bragança", 41.8071, -6.7589, "Norte"),
        district("CB", "Castelo Branco", "Castelo Branco", 39.8222, -7.4908, "Centro"),
        district("CO", "Coimbra", "Coimbra", 40.2033, -8.4103, "Centro"),
        district("EV", "Évora", "Évora", 38.5665, -7.9070, "Alentejo"),
        district("FA", "Faro", "Faro", 37.0194, -7.9322, "Algarve"),
        district("GU", "Guarda", "Guarda", 40.5373, -7.2658, "Centro"),
        district("LE", "Leiria", "Leiria", 39.7436, -8.8071, "Centro"),
        district("LI", "Lisboa", "Lisbon", 38.7223, -9.1393, "Lisboa"),
        district("PT", "Portalegre", "Portalegre", 39.2938, -7.4312, "Alentejo"),
        district("PO", "Porto", "Porto", 41.1579, -8.6291, "Norte"),
        district("SA", "Santarém", "Santarém", 39.2362, -8.6860, "Centro"),
        district("SE", "Setúbal", "Setúbal", 38.5244, -8.8882, "Lisboa"),
        district("VI", "Viana do Castelo", "Viana do Castelo", 41.6938, -8.8329, "Norte"),
        district("VR", "Vila Real", "Vila Real", 41.3003, -7.7443, "Norte"),
        district("VC", "Viseu", "Viseu", 40.6566, -7.9140, "Centro"),
    ]
});

pub const REGIONS: &[Region] = &[
    Region { name: "Norte", districts: &["BR", "BA", "PO", "VI", "VR"] },
    Region { name: "Centro", districts: &["AV", "CB", "CO", "GU", "LE", "SA", "VC"] },
    Region { name: "Lisboa", districts: &["LI", "SE"] },
    Region { name: "Alentejo", districts: &["BE", "EV", "PT"] },
    Region { name: "Algarve", districts: &["FA"] },
];

/// Look up a district by its short code.
pub fn find_district(id: &str) -> Option<&'static District> {
    PORTUGAL_DISTRICTS.iter().find(|d| d.id == id)
}

/// Look up a region by name.
pub fn find_region(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}
