//! Application wiring for Tempo
//!
//! Owns the dashboard state object that connects district selection,
//! geolocation, weather synchronization, and favorites, plus the
//! presentation-facing selector and map-view state.

pub mod dashboard;
pub mod error_mapping;
pub mod map;
pub mod selector;

pub use dashboard::{Dashboard, ViewMode};
pub use map::{tile_url, MapView};
pub use selector::SelectorState;
