//! Weather synchronizer: keeps the fetched snapshot in step with the
//! effective coordinates.
//!
//! State is published on a watch channel; the embedding event loop
//! subscribes and re-renders on change. A failed fetch keeps the previous
//! snapshot so the UI can show stale data next to the error.

use tokio::sync::watch;

use tempo_districts::Coordinates;

use crate::client::WeatherClient;
use crate::types::{ForecastDay, WeatherSnapshot};

/// Observable synchronizer state.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    /// Latest successfully fetched snapshot; survives later fetch errors.
    pub snapshot: Option<WeatherSnapshot>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Coordinates of the most recently issued fetch; `refetch` repeats them.
    pub coordinates: Option<Coordinates>,
}

pub struct WeatherSync {
    client: WeatherClient,
    state: watch::Sender<WeatherState>,
}

impl WeatherSync {
    pub fn new(client: WeatherClient) -> Self {
        let (state, _) = watch::channel(WeatherState::default());
        Self { client, state }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<WeatherState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WeatherState {
        self.state.borrow().clone()
    }

    /// Derived forecast sequence for the current snapshot (recomputed, not
    /// cached).
    pub fn forecast(&self) -> Vec<ForecastDay> {
        self.state
            .borrow()
            .snapshot
            .as_ref()
            .map(WeatherSnapshot::forecast_days)
            .unwrap_or_default()
    }

    /// Fetch iff `coordinates` differs from the last coordinates a fetch was
    /// issued for. First-time coordinates always fetch.
    pub async fn update_coordinates(&self, coordinates: Coordinates) {
        let unchanged = self.state.borrow().coordinates == Some(coordinates);
        if unchanged {
            return;
        }
        self.fetch(coordinates).await;
    }

    /// Repeat the last query. No-op if no coordinates have ever been
    /// resolved.
    pub async fn refetch(&self) {
        let coordinates = self.state.borrow().coordinates;
        if let Some(coordinates) = coordinates {
            self.fetch(coordinates).await;
        }
    }

    /// Unconditionally fetch for `coordinates` and publish the outcome.
    pub async fn fetch(&self, coordinates: Coordinates) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
            s.coordinates = Some(coordinates);
        });

        match self.client.fetch_forecast(coordinates).await {
            Ok(snapshot) => {
                self.state.send_modify(|s| {
                    s.snapshot = Some(snapshot);
                    s.is_loading = false;
                });
            }
            Err(e) => {
                tracing::error!("Weather fetch error: {}", e);
                // Keep any previously resolved snapshot in place
                self.state.send_modify(|s| {
                    s.error = Some(e.to_string());
                    s.is_loading = false;
                });
            }
        }
    }
}
