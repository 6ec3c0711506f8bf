//! OpenWeatherMap transformers.
//!
//! One `/weather` response feeds both the wind and the temperature slot.

use provider_schemas::openweather::{
    icon_url, CurrentWeatherResponse, ForecastItem, ForecastResponse,
};
use wx_common::time::epoch_to_iso;
use wx_common::units::{direction::normalize_degrees, distance::m_to_km};
use wx_common::{Phenomenon, Provider};

use crate::records::{ForecastRecord, TemperatureRecord, WindRecord};
use crate::series::tomorrow_index;
use crate::{TransformContext, Transformer};

const SOURCE_NAME: &str = "OpenWeatherMap";

fn location(name: Option<&String>, ctx: &TransformContext) -> String {
    name.filter(|n| !n.is_empty())
        .cloned()
        .unwrap_or_else(|| ctx.fallback_location())
}

fn timestamp(dt: Option<i64>, ctx: &TransformContext) -> String {
    dt.and_then(epoch_to_iso).unwrap_or_else(|| ctx.now_iso())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenWeatherWind;

impl Transformer for OpenWeatherWind {
    type Raw = CurrentWeatherResponse;
    type Record = WindRecord;

    const PROVIDER: Provider = Provider::OpenWeatherMap;
    const PHENOMENON: Phenomenon = Phenomenon::Wind;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<WindRecord> {
        let wind = raw.wind.as_ref()?;
        Some(WindRecord {
            source_name: SOURCE_NAME.to_string(),
            wind_speed: wind.speed.unwrap_or(0.0),
            wind_direction: normalize_degrees(wind.deg.unwrap_or(0.0)),
            wind_gust: wind.gust,
            pressure: raw.main.as_ref().and_then(|m| m.pressure),
            location: Some(location(raw.name.as_ref(), ctx)),
            timestamp: timestamp(raw.dt, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenWeatherTemperature;

impl Transformer for OpenWeatherTemperature {
    type Raw = CurrentWeatherResponse;
    type Record = TemperatureRecord;

    const PROVIDER: Provider = Provider::OpenWeatherMap;
    const PHENOMENON: Phenomenon = Phenomenon::Temperature;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<TemperatureRecord> {
        let main = raw.main.as_ref()?;
        Some(TemperatureRecord {
            source_name: SOURCE_NAME.to_string(),
            temperature: main.temp.unwrap_or(0.0),
            feels_like: main.feels_like,
            humidity: main.humidity,
            pressure: main.pressure,
            visibility: raw.visibility.map(m_to_km),
            cloud_cover: raw.clouds.as_ref().and_then(|c| c.all),
            location: Some(location(raw.name.as_ref(), ctx)),
            timestamp: timestamp(raw.dt, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenWeatherForecast;

impl OpenWeatherForecast {
    fn description(item: &ForecastItem) -> Option<String> {
        item.weather.first().and_then(|w| w.description.clone())
    }

    fn precipitation(item: &ForecastItem) -> f64 {
        item.pop.unwrap_or(0.0) * 100.0
    }
}

impl Transformer for OpenWeatherForecast {
    type Raw = ForecastResponse;
    type Record = ForecastRecord;

    const PROVIDER: Provider = Provider::OpenWeatherMap;
    const PHENOMENON: Phenomenon = Phenomenon::Forecast;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<ForecastRecord> {
        let today = raw.list.first()?;
        let tomorrow = tomorrow_index(&raw.list, |item| {
            item.dt.and_then(|dt| chrono::DateTime::from_timestamp(dt, 0))
        })
        .and_then(|i| raw.list.get(i));

        let today_main = today.main.clone().unwrap_or_default();
        let tomorrow_main = tomorrow.and_then(|t| t.main.clone());

        Some(ForecastRecord {
            source_name: SOURCE_NAME.to_string(),
            temperature: Some(today_main.temp.unwrap_or(0.0)),
            description: Some(Self::description(today).unwrap_or_default()),
            icon: today
                .weather
                .first()
                .and_then(|w| w.icon.as_deref())
                .map(icon_url),
            high_temp: Some(today_main.temp_max.unwrap_or(0.0)),
            low_temp: Some(today_main.temp_min.unwrap_or(0.0)),
            precipitation_chance: Some(Self::precipitation(today)),
            tomorrow_high_temp: tomorrow_main.as_ref().and_then(|m| m.temp_max),
            tomorrow_low_temp: tomorrow_main.as_ref().and_then(|m| m.temp_min),
            tomorrow_description: tomorrow.and_then(Self::description),
            tomorrow_precip_chance: tomorrow.map(Self::precipitation),
            location: Some(location(
                raw.city.as_ref().and_then(|c| c.name.as_ref()),
                ctx,
            )),
            timestamp: timestamp(today.dt, ctx),
            series: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wx_common::Coordinates;

    fn ctx() -> TransformContext {
        TransformContext::new(
            Coordinates::new(55.6553, 12.6489),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_missing_name_uses_query_coordinates() {
        let raw: CurrentWeatherResponse =
            serde_json::from_str(r#"{"wind": {"speed": 4.1, "deg": 360}}"#).unwrap();
        let record = OpenWeatherWind.transform(&raw, &ctx()).unwrap();
        assert_eq!(record.location.as_deref(), Some("55.655°N, 12.649°E"));
        assert_eq!(record.wind_direction, 0.0);
        assert_eq!(record.timestamp, "2024-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_absent_blocks_are_no_data() {
        let raw = CurrentWeatherResponse::default();
        assert!(OpenWeatherWind.transform(&raw, &ctx()).is_none());
        assert!(OpenWeatherTemperature.transform(&raw, &ctx()).is_none());
        assert!(OpenWeatherForecast
            .transform(&ForecastResponse::default(), &ctx())
            .is_none());
    }
}
