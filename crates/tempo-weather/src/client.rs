use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use tempo_districts::Coordinates;

use crate::types::{WeatherError, WeatherSnapshot, FORECAST_DAYS};

pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Daily variables requested for the forecast window.
const DAILY_VARIABLES: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";

/// Timezone all daily arrays are framed in.
const FORECAST_TIMEZONE: &str = "Europe/Lisbon";

/// HTTP client for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: Url,
    client: Arc<Client>,
}

impl WeatherClient {
    /// Create a client against the public Open-Meteo service.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(OPEN_METEO_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, self-hosted mirror).
    pub fn with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| WeatherError::Http { status: 0, status_text: e.to_string() })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client: Arc::new(client) })
    }

    /// Fetch current conditions plus the 7-day daily forecast for a point.
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(
            "Fetching forecast for {:.4}, {:.4}",
            coordinates.latitude,
            coordinates.longitude
        );

        let url = self
            .base_url
            .join("v1/forecast")
            .map_err(|e| WeatherError::Http { status: 0, status_text: e.to_string() })?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("timezone", FORECAST_TIMEZONE.to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.to_string()),
            });
        }

        let snapshot: WeatherSnapshot = response.json().await?;

        tracing::info!(
            "Fetched weather for {:.4}, {:.4}: {:.1}° code {}",
            snapshot.latitude,
            snapshot.longitude,
            snapshot.current_weather.temperature,
            snapshot.current_weather.weathercode
        );
        Ok(snapshot)
    }
}
