//! Integration tests for the weather client and synchronizer using wiremock.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tempo_districts::Coordinates;
use tempo_weather::{WeatherClient, WeatherSync};

const LISBON: Coordinates = Coordinates::new(38.7223, -9.1393);
const FARO: Coordinates = Coordinates::new(37.0194, -7.9322);

/// Forecast body with `days` daily entries.
fn forecast_body(days: usize) -> serde_json::Value {
    json!({
        "latitude": 38.72,
        "longitude": -9.14,
        "generationtime_ms": 0.3,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Lisbon",
        "elevation": 45.0,
        "current_weather": {
            "temperature": 27.9,
            "windspeed": 14.2,
            "winddirection": 315.0,
            "weathercode": 1,
            "time": "2026-08-01T13:00"
        },
        "daily": {
            "time": (1..=days).map(|d| format!("2026-08-{:02}", d)).collect::<Vec<_>>(),
            "temperature_2m_max": (0..days).map(|i| 28.0 + i as f64).collect::<Vec<_>>(),
            "temperature_2m_min": (0..days).map(|i| 18.0 + i as f64).collect::<Vec<_>>(),
            "weathercode": vec![0; days],
            "precipitation_sum": vec![0.0; days],
            "windspeed_10m_max": (0..days).map(|i| 15.0 + i as f64).collect::<Vec<_>>(),
        }
    })
}

async fn sync_against(server: &MockServer) -> WeatherSync {
    WeatherSync::new(WeatherClient::with_base_url(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_fetch_sends_fixed_request_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "38.7223"))
        .and(query_param("longitude", "-9.1393"))
        .and(query_param("current_weather", "true"))
        .and(query_param(
            "daily",
            "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max",
        ))
        .and(query_param("timezone", "Europe/Lisbon"))
        .and(query_param("forecast_days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let snapshot = client.fetch_forecast(LISBON).await.unwrap();

    assert_eq!(snapshot.current_weather.temperature, 27.9);
    assert_eq!(snapshot.forecast_days().len(), 7);
}

#[tokio::test]
async fn test_seven_day_body_yields_seven_zipped_entries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(LISBON).await;

    let forecast = sync.forecast();
    assert_eq!(forecast.len(), 7);
    assert_eq!(forecast[0].max_temp, 28.0);
    assert_eq!(forecast[6].max_temp, 34.0);
    assert_eq!(forecast[6].wind_speed, 21.0);
}

#[tokio::test]
async fn test_ten_day_body_truncates_to_seven() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(10)))
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(LISBON).await;

    assert_eq!(sync.forecast().len(), 7);
}

#[tokio::test]
async fn test_http_error_keeps_stale_snapshot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(LISBON).await;
    assert!(sync.state().error.is_none());

    // Server starts failing; the previously resolved data must survive
    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    sync.update_coordinates(FARO).await;

    let state = sync.state();
    let error = state.error.expect("error must be set");
    assert!(error.contains("Internal Server Error"), "got: {error}");
    assert!(state.snapshot.is_some(), "stale snapshot must be retained");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_same_coordinates_do_not_refetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(LISBON).await;
    sync.update_coordinates(LISBON).await;
    sync.update_coordinates(LISBON).await;
}

#[tokio::test]
async fn test_changed_coordinates_trigger_new_fetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(LISBON).await;
    sync.update_coordinates(FARO).await;

    assert_eq!(sync.state().coordinates, Some(FARO));
}

#[tokio::test]
async fn test_refetch_is_noop_without_coordinates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.refetch().await;
    assert!(sync.state().snapshot.is_none());
}

#[tokio::test]
async fn test_refetch_repeats_last_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "37.0194"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let sync = sync_against(&mock_server).await;
    sync.update_coordinates(FARO).await;
    sync.refetch().await;
}

#[tokio::test]
async fn test_network_error_is_reported() {
    // Point at a server that no longer exists
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let sync = WeatherSync::new(WeatherClient::with_base_url(&uri).unwrap());
    sync.update_coordinates(LISBON).await;

    let state = sync.state();
    assert!(state.error.is_some());
    assert!(state.snapshot.is_none());
    assert!(!state.is_loading);
}
