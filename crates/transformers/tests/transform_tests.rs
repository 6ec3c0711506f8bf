//! Transformer tests against recorded provider payloads.

use chrono::{TimeZone, Utc};
use provider_schemas::dmi::{ObservationCollection, TemperatureObservations, WindObservations};
use provider_schemas::{openweather, weatherapi, CoverageJson};
use test_utils::{assert_approx_eq, assert_some_approx_eq, fixture, fixtures};
use transformers::dmi::{
    DmiLightning, DmiMarineForecast, DmiOcean, DmiSeaLevel, DmiTemperature, DmiWind,
};
use transformers::openweather::{OpenWeatherForecast, OpenWeatherTemperature, OpenWeatherWind};
use transformers::weatherapi::{WeatherApiForecast, WeatherApiTemperature, WeatherApiWind};
use transformers::{RiskLevel, TransformContext, Transformer};
use wx_common::Coordinates;

fn ctx() -> TransformContext {
    TransformContext::new(
        Coordinates::new(56.0, 8.13),
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    )
}

// ============================================================================
// OpenWeatherMap
// ============================================================================

#[test]
fn test_openweather_current_feeds_wind_and_temperature() {
    let raw: openweather::CurrentWeatherResponse = fixture(fixtures::OPENWEATHER_CURRENT);

    let wind = OpenWeatherWind.transform(&raw, &ctx()).unwrap();
    assert_eq!(wind.source_name, "OpenWeatherMap");
    assert_approx_eq!(wind.wind_speed, 7.2, 1e-9);
    assert_approx_eq!(wind.wind_direction, 245.0, 1e-9);
    assert_some_approx_eq!(wind.wind_gust, 11.3, 1e-9);
    assert_eq!(wind.location.as_deref(), Some("Hvide Sande"));
    assert_eq!(wind.timestamp, "2024-01-15T11:50:00.000Z");

    let temp = OpenWeatherTemperature.transform(&raw, &ctx()).unwrap();
    assert_approx_eq!(temp.temperature, 4.8, 1e-9);
    assert_some_approx_eq!(temp.visibility, 10.0, 1e-9);
    assert_some_approx_eq!(temp.cloud_cover, 75.0, 1e-9);
    assert_some_approx_eq!(temp.pressure, 1007.0, 1e-9);
}

#[test]
fn test_openweather_forecast_today_and_tomorrow() {
    let raw: openweather::ForecastResponse = fixture(fixtures::OPENWEATHER_FORECAST);
    let record = OpenWeatherForecast.transform(&raw, &ctx()).unwrap();

    assert_eq!(record.description.as_deref(), Some("light rain"));
    assert_eq!(
        record.icon.as_deref(),
        Some("https://openweathermap.org/img/wn/10d@2x.png")
    );
    assert_some_approx_eq!(record.high_temp, 5.1, 1e-9);
    assert_some_approx_eq!(record.precipitation_chance, 20.0, 1e-9);

    // first entry on 2024-01-16 is index 4
    assert_some_approx_eq!(record.tomorrow_high_temp, 3.9, 1e-9);
    assert_some_approx_eq!(record.tomorrow_low_temp, 2.7, 1e-9);
    assert_eq!(record.tomorrow_description.as_deref(), Some("broken clouds"));
    assert_some_approx_eq!(record.tomorrow_precip_chance, 5.0, 1e-9);
    assert_eq!(record.location.as_deref(), Some("Hvide Sande"));
    assert!(record.series.is_empty());
}

// ============================================================================
// WeatherAPI.com
// ============================================================================

#[test]
fn test_weatherapi_converts_kph() {
    let raw: weatherapi::RealtimeResponse = fixture(fixtures::WEATHERAPI_CURRENT);
    let wind = WeatherApiWind.transform(&raw, &ctx()).unwrap();

    assert_eq!(wind.source_name, "WeatherAPI.com");
    assert_approx_eq!(wind.wind_speed, 7.0, 1e-9);
    assert_some_approx_eq!(wind.wind_gust, 11.0, 1e-9);
    assert_approx_eq!(wind.wind_direction, 240.0, 1e-9);
    assert_eq!(wind.timestamp, "2024-01-15T12:45:00.000Z");

    let temp = WeatherApiTemperature.transform(&raw, &ctx()).unwrap();
    assert_some_approx_eq!(temp.feels_like, 1.2, 1e-9);
    assert_some_approx_eq!(temp.visibility, 10.0, 1e-9);
}

#[test]
fn test_weatherapi_forecast() {
    let raw: weatherapi::ForecastResponse = fixture(fixtures::WEATHERAPI_FORECAST);
    let record = WeatherApiForecast.transform(&raw, &ctx()).unwrap();

    assert_eq!(
        record.icon.as_deref(),
        Some("https://cdn.weatherapi.com/weather/64x64/day/296.png")
    );
    assert_some_approx_eq!(record.high_temp, 5.4, 1e-9);
    assert_some_approx_eq!(record.low_temp, 2.9, 1e-9);
    assert_some_approx_eq!(record.precipitation_chance, 87.0, 1e-9);
    assert_eq!(record.tomorrow_description.as_deref(), Some("Overcast"));
    assert_some_approx_eq!(record.tomorrow_precip_chance, 20.0, 1e-9);
    assert_eq!(record.timestamp, "2024-01-15T12:45:00.000Z");
}

// ============================================================================
// DMI
// ============================================================================

#[test]
fn test_dmi_wind_matches_station() {
    let raw = WindObservations {
        speed: fixture(fixtures::DMI_WIND_SPEED),
        direction: Some(fixture(fixtures::DMI_WIND_DIR)),
        gust: Some(fixture(fixtures::DMI_WIND_GUST)),
    };
    let record = DmiWind.transform(&raw, &ctx()).unwrap();

    assert_eq!(record.source_name, "DMI");
    assert_approx_eq!(record.wind_speed, 8.2, 1e-9);
    // 06052 is listed first for wind_dir but 06058 selected the station
    assert_approx_eq!(record.wind_direction, 250.0, 1e-9);
    assert_some_approx_eq!(record.wind_gust, 12.4, 1e-9);
    assert_eq!(record.location.as_deref(), Some("06058"));
    assert_eq!(record.timestamp, "2024-01-15T11:50:00.000Z");
}

#[test]
fn test_dmi_temperature_secondary_fallback() {
    let raw = TemperatureObservations {
        temperature: fixture(fixtures::DMI_TEMP_DRY),
        humidity: Some(fixture(fixtures::DMI_HUMIDITY)),
        pressure: Some(fixture(fixtures::DMI_PRESSURE)),
    };
    let record = DmiTemperature.transform(&raw, &ctx()).unwrap();

    assert_approx_eq!(record.temperature, 4.3, 1e-9);
    assert_some_approx_eq!(record.humidity, 91.0, 1e-9);
    // no 06058 pressure, so the pressure collection's first feature
    assert_some_approx_eq!(record.pressure, 1008.2, 1e-9);
}

#[test]
fn test_dmi_sea_level_and_ocean() {
    let sea: ObservationCollection = fixture(fixtures::DMI_SEA_LEVEL);
    let record = DmiSeaLevel.transform(&sea, &ctx()).unwrap();
    assert_eq!(record.source_name, "DMI Sea Level");
    assert_approx_eq!(record.sea_level, -12.0, 1e-9);
    assert_eq!(record.location.as_deref(), Some("06059"));

    let ocean: ObservationCollection = fixture(fixtures::DMI_OCEAN);
    let record = DmiOcean.transform(&ocean, &ctx()).unwrap();
    assert_some_approx_eq!(record.wave_height, 1.4, 1e-9);
    assert_some_approx_eq!(record.water_temperature, 6.2, 1e-9);
    assert_some_approx_eq!(record.salinity, 30.5, 1e-9);
}

#[test]
fn test_dmi_empty_collection_is_no_data() {
    let empty: ObservationCollection = fixture(fixtures::DMI_EMPTY);
    assert!(DmiSeaLevel.transform(&empty, &ctx()).is_none());
    assert!(DmiOcean.transform(&empty, &ctx()).is_none());
    assert!(DmiLightning.transform(&empty, &ctx()).is_none());
}

#[test]
fn test_dmi_marine_forecast_series() {
    let raw: CoverageJson = fixture(fixtures::DMI_FORECAST);
    let record = DmiMarineForecast.transform(&raw, &ctx()).unwrap();

    // the null wind-u point at 23:00 is dropped
    assert_eq!(record.series.len(), 3);
    let times: Vec<&str> = record.series.iter().map(|p| p.time.as_str()).collect();
    assert_eq!(
        times,
        vec![
            "2024-01-15T22:00:00.000Z",
            "2024-01-16T00:00:00.000Z",
            "2024-01-16T01:00:00.000Z"
        ]
    );

    assert_approx_eq!(record.series[0].wind_speed, 5.0, 1e-9);
    assert_approx_eq!(record.series[0].wind_direction, 36.869_897_645_844_02, 1e-9);
    assert_approx_eq!(record.series[1].wind_direction, 270.0, 1e-9);
    assert_approx_eq!(record.series[2].wind_direction, 0.0, 1e-9);

    assert_some_approx_eq!(record.temperature, 6.0, 1e-9);
    assert_eq!(record.description.as_deref(), Some("Marine conditions - Wind 5.0 m/s"));
    assert_some_approx_eq!(record.high_temp, 6.0, 1e-9);
    assert_some_approx_eq!(record.tomorrow_high_temp, 5.9, 1e-9);
    assert_some_approx_eq!(record.tomorrow_low_temp, 5.8, 1e-9);
    assert_eq!(
        record.tomorrow_description.as_deref(),
        Some("Marine forecast - Wind 4.0 m/s")
    );
    assert_eq!(record.location.as_deref(), Some("56.000°N, 8.130°E"));
    assert_eq!(record.timestamp, "2024-01-15T22:00:00.000Z");
}

#[test]
fn test_dmi_marine_forecast_all_null_is_no_data() {
    let raw: CoverageJson = fixture(fixtures::DMI_FORECAST_NULLS);
    assert!(DmiMarineForecast.transform(&raw, &ctx()).is_none());
}

#[test]
fn test_dmi_lightning_summary() {
    let raw: ObservationCollection = fixture(fixtures::DMI_LIGHTNING);
    let record = DmiLightning.transform(&raw, &ctx()).unwrap();

    assert_eq!(record.strike_count, 3);
    assert_eq!(record.area_strike_count, Some(3));
    assert_eq!(record.risk_level, RiskLevel::Low);
    assert_eq!(
        record.last_strike_time.as_deref(),
        Some("2024-01-15T11:32:40.118Z")
    );
    assert_some_approx_eq!(record.intensity, 24.1, 1e-9);
    // nearest strike, l-002, is about 7 km from the query point
    let distance = record.distance.unwrap();
    assert!(distance > 6.5 && distance < 7.5, "distance {}", distance);
    assert_eq!(record.location.as_deref(), Some("Lightning Area (3 strikes)"));
}
