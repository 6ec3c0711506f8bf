//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use providers::{ProvidersConfig, Transport};
use serde_json::Value;
use test_utils::{fixtures, MockReply, MockTransport};
use tower::ServiceExt;
use wx_common::{Location, LocationsConfig};

use wx_api::state::AppState;

fn config() -> ProvidersConfig {
    ProvidersConfig::from_lookup(|name| match name {
        "DMI_BASE_URL" => Some("https://dmi.test".to_string()),
        "OPENWEATHER_BASE_URL" => Some("https://owm.test".to_string()),
        "WEATHERAPI_BASE_URL" => Some("https://wapi.test".to_string()),
        n if n.ends_with("_KEY") => Some(format!("{}-value", n.to_lowercase())),
        _ => None,
    })
}

fn healthy() -> MockTransport {
    MockTransport::new()
        .on("parameterId=wind_speed", MockReply::fixture(fixtures::DMI_WIND_SPEED))
        .on("parameterId=wind_dir", MockReply::fixture(fixtures::DMI_WIND_DIR))
        .on("parameterId=wind_max", MockReply::fixture(fixtures::DMI_WIND_GUST))
        .on("parameterId=temp_dry", MockReply::fixture(fixtures::DMI_TEMP_DRY))
        .on("parameterId=humidity", MockReply::fixture(fixtures::DMI_HUMIDITY))
        .on("parameterId=pressure", MockReply::fixture(fixtures::DMI_PRESSURE))
        .on("parameterId=sea_reg", MockReply::fixture(fixtures::DMI_SEA_LEVEL))
        .on("oceanObs", MockReply::fixture(fixtures::DMI_OCEAN))
        .on("lightningdata", MockReply::fixture(fixtures::DMI_LIGHTNING))
        .on("dkss_nsbs", MockReply::fixture(fixtures::DMI_FORECAST))
        .on("owm.test/weather", MockReply::fixture(fixtures::OPENWEATHER_CURRENT))
        .on("owm.test/forecast", MockReply::fixture(fixtures::OPENWEATHER_FORECAST))
        .on("current.json", MockReply::fixture(fixtures::WEATHERAPI_CURRENT))
        .on("forecast.json", MockReply::fixture(fixtures::WEATHERAPI_FORECAST))
}

fn locations() -> LocationsConfig {
    LocationsConfig {
        locations: vec![
            Location::new("HvideSande", 56.0, 8.13),
            Location::new("Klitmoller", 57.04, 8.49),
        ],
    }
}

fn app(mock: &Arc<MockTransport>, with_metrics: bool) -> Router {
    let metrics = with_metrics.then(|| PrometheusBuilder::new().build_recorder().handle());
    let state = AppState::with_transport(
        &config(),
        mock.clone() as Arc<dyn Transport>,
        locations(),
        metrics,
    );
    wx_api::router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let mock = Arc::new(healthy());
    let (status, json) = get_json(app(&mock, false), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_weather_for_all_locations_in_order() {
    let mock = Arc::new(healthy());
    let (status, json) = get_json(app(&mock, false), "/api/weather").await;

    assert_eq!(status, StatusCode::OK);
    let bundles = json.as_array().unwrap();
    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0]["name"], "HvideSande");
    assert_eq!(bundles[1]["name"], "Klitmoller");
    assert_eq!(bundles[1]["displayName"], "Klitmoller");
    assert_eq!(bundles[0]["wind"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_weather_for_named_location_is_case_insensitive() {
    let mock = Arc::new(healthy());
    let (status, json) = get_json(app(&mock, false), "/api/weather/hvidesande").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "HvideSande");
    assert_eq!(json["displayName"], "Hvide Sande");
    assert_eq!(json["wind"][0]["outcome"]["status"], "ok");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_unknown_location_is_not_found() {
    let mock = Arc::new(healthy());
    let (status, json) = get_json(app(&mock, false), "/api/weather/Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Unknown location: Atlantis");
    assert_eq!(json["locations"][0], "HvideSande");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_locations_listing() {
    let mock = Arc::new(healthy());
    let (status, json) = get_json(app(&mock, false), "/api/locations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["name"], "HvideSande");
    assert_eq!(json[0]["lat"], 56.0);
    assert_eq!(json[1]["lon"], 8.49);
}

#[tokio::test]
async fn test_failed_provider_still_returns_ok_bundle() {
    let mock = Arc::new(
        MockTransport::new()
            .on("owm.test", MockReply::status(500))
            .on("wapi.test", MockReply::status(500))
            .on("dmi.test", MockReply::status(500)),
    );
    let (status, json) = get_json(app(&mock, false), "/api/weather/HvideSande").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["wind"][0]["outcome"]["status"], "failed");
    assert_eq!(json["error"]["failedSources"], 12);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let mock = Arc::new(healthy());
    let (status, _) = get(app(&mock, true), "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app(&mock, false), "/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
