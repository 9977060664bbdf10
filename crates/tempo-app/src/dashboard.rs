//! Dashboard state object.
//!
//! Explicitly owns every piece of UI-facing state and mutates it only
//! through its own operations. The embedding event loop subscribes to the
//! geolocation and weather channels and calls [`Dashboard::refresh`] after
//! any change that can move the effective coordinates.

use std::sync::Arc;

use tokio::sync::watch;

use tempo_districts::{Coordinates, District, PORTUGAL_DISTRICTS};
use tempo_favorites::{FavoritesStore, KeyValueStore};
use tempo_location::{
    resolve_coordinates, GeolocationResolver, GeolocationState, PositionSource,
};
use tempo_weather::{ForecastDay, WeatherClient, WeatherState, WeatherSync};

use crate::map::MapView;
use crate::selector::SelectorState;

/// Which district picker is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

pub struct Dashboard<P, S> {
    geolocation: Arc<GeolocationResolver<P>>,
    weather: WeatherSync,
    favorites: FavoritesStore<S>,
    selected: Option<District>,
    pub selector: SelectorState,
    pub map: MapView,
    view_mode: ViewMode,
    show_favorites: bool,
}

impl<P, S> Dashboard<P, S>
where
    P: PositionSource + 'static,
    S: KeyValueStore,
{
    /// Wire up the dashboard. Requires a running tokio runtime (permission
    /// observation spawns a watcher task).
    pub fn new(position_source: P, store: S, weather_client: WeatherClient) -> Self {
        let geolocation = Arc::new(GeolocationResolver::new(position_source));
        Arc::clone(&geolocation).activate();

        Self {
            geolocation,
            weather: WeatherSync::new(weather_client),
            favorites: FavoritesStore::load(store),
            selected: None,
            selector: SelectorState::new(),
            map: MapView::default(),
            view_mode: ViewMode::default(),
            show_favorites: false,
        }
    }

    /// Issue the initial fetch for whatever the precedence resolves to
    /// (the Lisbon fallback until a selection or fix exists).
    pub async fn start(&mut self) {
        self.refresh().await;
    }

    /// Re-resolve the effective coordinates and fetch if they moved.
    pub async fn refresh(&mut self) {
        let coordinates =
            resolve_coordinates(self.selected.as_ref(), &self.geolocation.state());
        self.weather.update_coordinates(coordinates).await;
    }

    // --- selection -------------------------------------------------------

    pub fn selected_district(&self) -> Option<&District> {
        self.selected.as_ref()
    }

    /// Select a district explicitly; it takes precedence over geolocation.
    pub async fn select_district(&mut self, district: District) {
        tracing::info!("Selecting district: {}", district.name);
        self.map.focus_district(&district);
        self.selected = Some(district);
        self.refresh().await;
    }

    /// Ask for the device position. Clears the explicit selection so the
    /// fix (once resolved) drives the weather query.
    pub async fn request_my_location(&mut self) {
        self.selected = None;
        self.geolocation.request_location().await;

        if let Some(position) = self.geolocation.state().coordinates() {
            self.map.center_on_user(position);
        }
        self.refresh().await;
    }

    /// Resolve a map click to the nearest district and select it.
    pub async fn handle_map_click(&mut self, point: Coordinates) {
        let Some(district) = self.map.click_target(point, &PORTUGAL_DISTRICTS) else {
            tracing::debug!(
                "Map click at {:.4}, {:.4} matched no district",
                point.latitude,
                point.longitude
            );
            return;
        };
        self.select_district(district.clone()).await;
    }

    // --- observable state ------------------------------------------------

    pub fn geolocation_state(&self) -> GeolocationState {
        self.geolocation.state()
    }

    pub fn subscribe_geolocation(&self) -> watch::Receiver<GeolocationState> {
        self.geolocation.subscribe()
    }

    pub fn weather_state(&self) -> WeatherState {
        self.weather.state()
    }

    pub fn subscribe_weather(&self) -> watch::Receiver<WeatherState> {
        self.weather.subscribe()
    }

    /// Derived 7-day forecast for the current snapshot.
    pub fn forecast(&self) -> Vec<ForecastDay> {
        self.weather.forecast()
    }

    /// Retry action for a failed weather fetch.
    pub async fn retry_weather(&mut self) {
        self.weather.refetch().await;
    }

    // --- favorites -------------------------------------------------------

    pub fn favorites(&self) -> &[District] {
        self.favorites.favorites()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn toggle_favorite(&mut self, district: District) {
        self.favorites.toggle(district);
    }

    pub fn remove_favorite(&mut self, id: &str) {
        self.favorites.remove(id);
    }

    // --- view chrome -----------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::List => ViewMode::Map,
            ViewMode::Map => ViewMode::List,
        };
    }

    pub fn show_favorites(&self) -> bool {
        self.show_favorites
    }

    pub fn toggle_favorites_panel(&mut self) {
        self.show_favorites = !self.show_favorites;
    }
}
