use anyhow::Result;

use tempo_app::{Dashboard, ViewMode};
use tempo_favorites::JsonFileStore;
use tempo_location::UnsupportedPositionSource;
use tempo_weather::{weather_code, WeatherClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    tempo_core::init()?;

    let config = tempo_core::Config::load_validated()?;
    let client = WeatherClient::with_base_url(&config.weather.api_base_url)?;
    let store = JsonFileStore::new(&config.config_dir);

    // Headless runs have no location capability; the dashboard falls back
    // to Lisbon until a district is selected.
    let mut dashboard = Dashboard::new(UnsupportedPositionSource, store, client);
    if config.ui.start_in_map_view {
        dashboard.set_view_mode(ViewMode::Map);
    }
    dashboard.start().await;

    tracing::info!("Tempo dashboard started");

    println!("Tempo - Portugal District Weather");
    println!("Configuration: {}", config.config_dir.display());

    let state = dashboard.weather_state();
    if let Some(error) = &state.error {
        println!("\nWeather unavailable: {error}");
        return Ok(());
    }

    if let Some(snapshot) = &state.snapshot {
        let current = &snapshot.current_weather;
        let code = weather_code(current.weathercode);
        println!(
            "\nCurrent conditions at {:.4}, {:.4}:",
            snapshot.latitude, snapshot.longitude
        );
        println!(
            "  {} {}  {:.1}°C  wind {:.0} km/h",
            code.icon, code.description, current.temperature, current.windspeed
        );

        println!("\n7-day forecast:");
        for day in dashboard.forecast() {
            let code = weather_code(day.weather_code);
            println!(
                "  {}  {} {:<28} {:>5.1}° / {:>5.1}°  rain {:>4.1} mm  wind {:>3.0} km/h",
                day.date, code.icon, code.description, day.max_temp, day.min_temp,
                day.precipitation, day.wind_speed
            );
        }
    }

    println!("\nFavorites: {}", dashboard.favorites().len());

    Ok(())
}
