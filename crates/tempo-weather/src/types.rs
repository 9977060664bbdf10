use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The forecast window requested from the API and the maximum length of the
/// derived forecast sequence.
pub const FORECAST_DAYS: usize = 7;

/// Raw forecast response as returned by the API.
///
/// Replaced wholesale on every successful fetch; never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: CurrentWeather,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyWeather>,
}

/// Current conditions block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
    /// Local timestamp in the API's timezone, as sent on the wire.
    pub time: String,
}

/// Daily forecast arrays, indexed positionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeather {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weathercode: Vec<i32>,
    pub precipitation_sum: Vec<f64>,
    pub windspeed_10m_max: Vec<f64>,
}

/// One normalized daily forecast entry derived from the raw arrays.
///
/// Index 0 is "today" in the request frame; callers must not assume it
/// matches the viewer's local date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
    pub weather_code: i32,
    pub precipitation: f64,
    pub wind_speed: f64,
}

impl WeatherSnapshot {
    /// Derive the normalized forecast sequence by zipping the daily arrays
    /// by index, truncated to [`FORECAST_DAYS`]. Empty when the snapshot has
    /// no daily section.
    pub fn forecast_days(&self) -> Vec<ForecastDay> {
        let Some(daily) = &self.daily else {
            return Vec::new();
        };

        daily
            .time
            .iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .filter_map(|(i, date)| {
                Some(ForecastDay {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
                    max_temp: *daily.temperature_2m_max.get(i)?,
                    min_temp: *daily.temperature_2m_min.get(i)?,
                    weather_code: *daily.weathercode.get(i)?,
                    precipitation: *daily.precipitation_sum.get(i)?,
                    wind_speed: *daily.windspeed_10m_max.get(i)?,
                })
            })
            .collect()
    }
}

/// Weather provider errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Non-2xx response from the forecast endpoint.
    #[error("Weather API error: {status_text}")]
    Http { status: u16, status_text: String },

    /// Transport or body-decode failure.
    #[error("Failed to fetch weather data: {0}")]
    Network(#[from] reqwest::Error),
}
