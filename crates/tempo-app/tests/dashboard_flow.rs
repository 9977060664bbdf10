//! End-to-end dashboard scenarios against a mock weather API and a fake
//! position source.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::future::Future;
use std::sync::Mutex;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tempo_app::{Dashboard, ViewMode};
use tempo_districts::{find_district, Coordinates};
use tempo_favorites::MemoryStore;
use tempo_location::{Position, PositionError, PositionRequest, PositionSource};
use tempo_weather::WeatherClient;

/// Source that serves one queued fix, as if the user granted permission.
struct GrantedSource {
    fix: Mutex<Option<Position>>,
}

impl GrantedSource {
    fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Mutex::new(Some(Position { latitude, longitude, accuracy_meters: Some(15.0) })),
        }
    }
}

impl PositionSource for GrantedSource {
    fn is_available(&self) -> bool {
        true
    }

    fn query_position(
        &self,
        _request: PositionRequest,
    ) -> impl Future<Output = Result<Position, PositionError>> + Send {
        let fix = self.fix.lock().unwrap().take();
        async move { fix.ok_or(PositionError::Unavailable) }
    }
}

fn forecast_body() -> serde_json::Value {
    json!({
        "latitude": 37.0,
        "longitude": -7.9,
        "current_weather": {
            "temperature": 30.5,
            "windspeed": 11.0,
            "winddirection": 200.0,
            "weathercode": 0,
            "time": "2026-08-01T15:00"
        },
        "daily": {
            "time": (1..=7).map(|d| format!("2026-08-{:02}", d)).collect::<Vec<_>>(),
            "temperature_2m_max": vec![31.0; 7],
            "temperature_2m_min": vec![20.0; 7],
            "weathercode": vec![0; 7],
            "precipitation_sum": vec![0.0; 7],
            "windspeed_10m_max": vec![12.0; 7],
        }
    })
}

#[tokio::test]
async fn test_select_then_locate_issues_two_fetches() {
    let mock_server = MockServer::start().await;

    // One fetch for Faro's coordinates...
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "37.0194"))
        .and(query_param("longitude", "-7.9322"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...then one for the device fix after "My Location"
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.1234"))
        .and(query_param("longitude", "-8.4567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard =
        Dashboard::new(GrantedSource::at(40.1234, -8.4567), MemoryStore::new(), client);

    // User picks Faro from the selector
    let faro = find_district("FA").unwrap().clone();
    dashboard.select_district(faro).await;

    let state = dashboard.weather_state();
    assert_eq!(state.coordinates, Some(Coordinates::new(37.0194, -7.9322)));
    assert_eq!(state.snapshot.as_ref().unwrap().current_weather.temperature, 30.5);
    assert_eq!(dashboard.forecast().len(), 7);

    // User clicks "My Location" and the fix resolves; with no district
    // selected any more, the precedence falls through to geolocation
    dashboard.request_my_location().await;

    assert!(dashboard.selected_district().is_none());
    let state = dashboard.weather_state();
    assert_eq!(state.coordinates, Some(Coordinates::new(40.1234, -8.4567)));
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_start_fetches_lisbon_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "38.7223"))
        .and(query_param("longitude", "-9.1393"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        MemoryStore::new(),
        client,
    );
    dashboard.start().await;

    assert!(dashboard.weather_state().snapshot.is_some());
}

#[tokio::test]
async fn test_map_click_selects_nearest_district() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "41.1579"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        MemoryStore::new(),
        client,
    );

    // A click just outside Porto's marker still selects Porto
    dashboard.handle_map_click(Coordinates::new(41.20, -8.60)).await;

    assert_eq!(dashboard.selected_district().unwrap().id, "PO");
    assert_eq!(dashboard.map.zoom, 9);
}

#[tokio::test]
async fn test_map_click_in_the_ocean_changes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        MemoryStore::new(),
        client,
    );

    dashboard.handle_map_click(Coordinates::new(36.0, -20.0)).await;
    assert!(dashboard.selected_district().is_none());
}

#[tokio::test]
async fn test_reselecting_same_district_does_not_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        MemoryStore::new(),
        client,
    );

    let faro = find_district("FA").unwrap().clone();
    dashboard.select_district(faro.clone()).await;
    dashboard.select_district(faro).await;
}

#[tokio::test]
async fn test_favorites_survive_across_dashboard_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&mock_server)
        .await;

    let faro = find_district("FA").unwrap().clone();

    {
        let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
        let mut dashboard = Dashboard::new(
            tempo_location::UnsupportedPositionSource,
            tempo_favorites::JsonFileStore::new(dir.path()),
            client,
        );
        dashboard.toggle_favorite(faro.clone());
        assert!(dashboard.is_favorite("FA"));
    }

    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        tempo_favorites::JsonFileStore::new(dir.path()),
        client,
    );
    assert!(dashboard.is_favorite("FA"));
    assert_eq!(dashboard.favorites().len(), 1);
}

#[tokio::test]
async fn test_view_chrome_toggles() {
    let mock_server = MockServer::start().await;
    let client = WeatherClient::with_base_url(&mock_server.uri()).unwrap();
    let mut dashboard = Dashboard::new(
        tempo_location::UnsupportedPositionSource,
        MemoryStore::new(),
        client,
    );

    assert_eq!(dashboard.view_mode(), ViewMode::List);
    dashboard.toggle_view_mode();
    assert_eq!(dashboard.view_mode(), ViewMode::Map);

    assert!(!dashboard.show_favorites());
    dashboard.toggle_favorites_panel();
    assert!(dashboard.show_favorites());
}
