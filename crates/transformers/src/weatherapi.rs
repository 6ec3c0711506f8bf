//! WeatherAPI.com transformers.

use provider_schemas::weatherapi::{
    absolute_icon_url, ApiLocation, Current, ForecastDay, ForecastResponse, RealtimeResponse,
};
use wx_common::time::{epoch_to_iso, parse_iso8601, to_iso};
use wx_common::units::{direction::normalize_degrees, speed::kph_to_ms};
use wx_common::{Phenomenon, Provider};

use crate::records::{ForecastRecord, TemperatureRecord, WindRecord};
use crate::{TransformContext, Transformer};

const SOURCE_NAME: &str = "WeatherAPI.com";

fn location(loc: Option<&ApiLocation>, ctx: &TransformContext) -> String {
    loc.and_then(|l| l.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| ctx.fallback_location())
}

/// `last_updated` is local time without an offset; it is read as UTC.
fn observed_at(current: &Current, ctx: &TransformContext) -> String {
    current
        .last_updated
        .as_deref()
        .and_then(parse_iso8601)
        .map(to_iso)
        .or_else(|| current.last_updated_epoch.and_then(epoch_to_iso))
        .unwrap_or_else(|| ctx.now_iso())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherApiWind;

impl Transformer for WeatherApiWind {
    type Raw = RealtimeResponse;
    type Record = WindRecord;

    const PROVIDER: Provider = Provider::WeatherApi;
    const PHENOMENON: Phenomenon = Phenomenon::Wind;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<WindRecord> {
        let current = raw.current.as_ref()?;
        Some(WindRecord {
            source_name: SOURCE_NAME.to_string(),
            wind_speed: current.wind_kph.map(kph_to_ms).unwrap_or(0.0),
            wind_direction: normalize_degrees(current.wind_degree.unwrap_or(0.0)),
            wind_gust: current.gust_kph.map(kph_to_ms),
            pressure: current.pressure_mb,
            location: Some(location(raw.location.as_ref(), ctx)),
            timestamp: observed_at(current, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherApiTemperature;

impl Transformer for WeatherApiTemperature {
    type Raw = RealtimeResponse;
    type Record = TemperatureRecord;

    const PROVIDER: Provider = Provider::WeatherApi;
    const PHENOMENON: Phenomenon = Phenomenon::Temperature;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<TemperatureRecord> {
        let current = raw.current.as_ref()?;
        Some(TemperatureRecord {
            source_name: SOURCE_NAME.to_string(),
            temperature: current.temp_c.unwrap_or(0.0),
            feels_like: current.feelslike_c,
            humidity: current.humidity,
            pressure: current.pressure_mb,
            visibility: current.vis_km,
            cloud_cover: current.cloud,
            location: Some(location(raw.location.as_ref(), ctx)),
            timestamp: observed_at(current, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherApiForecast;

impl Transformer for WeatherApiForecast {
    type Raw = ForecastResponse;
    type Record = ForecastRecord;

    const PROVIDER: Provider = Provider::WeatherApi;
    const PHENOMENON: Phenomenon = Phenomenon::Forecast;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<ForecastRecord> {
        let days: &[ForecastDay] = raw
            .forecast
            .as_ref()
            .map(|f| f.forecastday.as_slice())
            .unwrap_or(&[]);
        if raw.current.is_none() && days.is_empty() {
            return None;
        }

        let current = raw.current.clone().unwrap_or_default();
        let today = days.first().and_then(|d| d.day.as_ref());
        let tomorrow = days.get(1).and_then(|d| d.day.as_ref());
        let condition = current.condition.as_ref();

        Some(ForecastRecord {
            source_name: SOURCE_NAME.to_string(),
            temperature: Some(current.temp_c.unwrap_or(0.0)),
            description: Some(condition.and_then(|c| c.text.clone()).unwrap_or_default()),
            icon: condition
                .and_then(|c| c.icon.as_deref())
                .map(absolute_icon_url),
            high_temp: Some(today.and_then(|d| d.maxtemp_c).unwrap_or(0.0)),
            low_temp: Some(today.and_then(|d| d.mintemp_c).unwrap_or(0.0)),
            precipitation_chance: Some(today.and_then(|d| d.daily_chance_of_rain).unwrap_or(0.0)),
            tomorrow_high_temp: tomorrow.and_then(|d| d.maxtemp_c),
            tomorrow_low_temp: tomorrow.and_then(|d| d.mintemp_c),
            tomorrow_description: tomorrow
                .and_then(|d| d.condition.as_ref())
                .and_then(|c| c.text.clone()),
            tomorrow_precip_chance: tomorrow.and_then(|d| d.daily_chance_of_rain),
            location: Some(location(raw.location.as_ref(), ctx)),
            timestamp: current
                .last_updated_epoch
                .and_then(epoch_to_iso)
                .unwrap_or_else(|| ctx.now_iso()),
            series: Vec::new(),
        })
    }
}
