//! WMO weather interpretation codes.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// One entry of the weather-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCode {
    pub code: i32,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Code table in ascending WMO order. The first entry is the fallback for
/// codes the table does not know.
pub const WEATHER_CODES: &[WeatherCode] = &[
    WeatherCode { code: 0, description: "Clear sky", icon: "☀️" },
    WeatherCode { code: 1, description: "Mainly clear", icon: "🌤️" },
    WeatherCode { code: 2, description: "Partly cloudy", icon: "⛅" },
    WeatherCode { code: 3, description: "Overcast", icon: "☁️" },
    WeatherCode { code: 45, description: "Foggy", icon: "🌫️" },
    WeatherCode { code: 48, description: "Depositing rime fog", icon: "🌫️" },
    WeatherCode { code: 51, description: "Light drizzle", icon: "🌦️" },
    WeatherCode { code: 53, description: "Moderate drizzle", icon: "🌦️" },
    WeatherCode { code: 55, description: "Dense drizzle", icon: "🌦️" },
    WeatherCode { code: 56, description: "Light freezing drizzle", icon: "🌨️" },
    WeatherCode { code: 57, description: "Dense freezing drizzle", icon: "🌨️" },
    WeatherCode { code: 61, description: "Slight rain", icon: "🌧️" },
    WeatherCode { code: 63, description: "Moderate rain", icon: "🌧️" },
    WeatherCode { code: 65, description: "Heavy rain", icon: "🌧️" },
    WeatherCode { code: 71, description: "Slight snow fall", icon: "❄️" },
    WeatherCode { code: 73, description: "Moderate snow fall", icon: "❄️" },
    WeatherCode { code: 75, description: "Heavy snow fall", icon: "❄️" },
    WeatherCode { code: 77, description: "Snow grains", icon: "❄️" },
    WeatherCode { code: 80, description: "Slight rain showers", icon: "🌦️" },
    WeatherCode { code: 81, description: "Moderate rain showers", icon: "🌦️" },
    WeatherCode { code: 82, description: "Violent rain showers", icon: "🌦️" },
    WeatherCode { code: 85, description: "Slight snow showers", icon: "🌨️" },
    WeatherCode { code: 86, description: "Heavy snow showers", icon: "🌨️" },
    WeatherCode { code: 95, description: "Thunderstorm", icon: "⛈️" },
    WeatherCode { code: 96, description: "Thunderstorm with slight hail", icon: "⛈️" },
    WeatherCode { code: 99, description: "Thunderstorm with heavy hail", icon: "⛈️" },
];

/// Look up the table entry for a WMO code. Unknown codes resolve to the
/// clear-sky entry.
pub fn weather_code(code: i32) -> &'static WeatherCode {
    WEATHER_CODES
        .iter()
        .find(|entry| entry.code == code)
        .unwrap_or(&WEATHER_CODES[0])
}
