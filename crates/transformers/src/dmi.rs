//! DMI transformers (metObs, oceanObs, lightningdata, forecastedr).
//!
//! Station selection is first-feature-wins on the primary parameter; no
//! nearest-station search is done. Secondary parameters prefer the feature
//! from the same station and otherwise take their own first feature.

use provider_schemas::coverage::CoverageJson;
use provider_schemas::dmi::{
    ObservationCollection, ObservationFeature, TemperatureObservations, WindObservations,
};
use wx_common::time::{normalize_iso, parse_iso8601};
use wx_common::units::direction::normalize_degrees;
use wx_common::{Phenomenon, Provider};

use crate::records::{
    ForecastRecord, LightningRecord, OceanRecord, RiskLevel, SeaLevelRecord, TemperatureRecord,
    WindRecord,
};
use crate::series::{marine_series, point_date, series_dates, water_temperature_range};
use crate::{TransformContext, Transformer};

fn station_label(feature: &ObservationFeature, ctx: &TransformContext) -> String {
    feature
        .properties
        .station_id
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| ctx.fallback_location())
}

fn observed_at(feature: &ObservationFeature, ctx: &TransformContext) -> String {
    feature
        .properties
        .observed
        .as_deref()
        .map(normalize_iso)
        .unwrap_or_else(|| ctx.now_iso())
}

/// Value of a secondary parameter for the station chosen by the primary.
fn matched_value(station: Option<&str>, secondary: Option<&ObservationCollection>) -> Option<f64> {
    let collection = secondary?;
    station
        .and_then(|id| collection.for_station(id))
        .or_else(|| collection.first())
        .and_then(|f| f.properties.value)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DmiWind;

impl Transformer for DmiWind {
    type Raw = WindObservations;
    type Record = WindRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::Wind;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<WindRecord> {
        let primary = raw.speed.first()?;
        let speed = primary.properties.value?;
        let station = primary.properties.station_id.as_deref();

        Some(WindRecord {
            source_name: Provider::Dmi.display_name().to_string(),
            wind_speed: speed,
            wind_direction: normalize_degrees(
                matched_value(station, raw.direction.as_ref()).unwrap_or(0.0),
            ),
            wind_gust: matched_value(station, raw.gust.as_ref()),
            pressure: None,
            location: Some(station_label(primary, ctx)),
            timestamp: observed_at(primary, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DmiTemperature;

impl Transformer for DmiTemperature {
    type Raw = TemperatureObservations;
    type Record = TemperatureRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::Temperature;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<TemperatureRecord> {
        let primary = raw.temperature.first()?;
        let temperature = primary.properties.value?;
        let station = primary.properties.station_id.as_deref();

        Some(TemperatureRecord {
            source_name: Provider::Dmi.display_name().to_string(),
            temperature,
            feels_like: None,
            humidity: matched_value(station, raw.humidity.as_ref()),
            pressure: matched_value(station, raw.pressure.as_ref()),
            visibility: None,
            cloud_cover: None,
            location: Some(station_label(primary, ctx)),
            timestamp: observed_at(primary, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DmiOcean;

impl Transformer for DmiOcean {
    type Raw = ObservationCollection;
    type Record = OceanRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::Ocean;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<OceanRecord> {
        let feature = raw.first()?;
        let props = &feature.properties;
        if props.value.is_none() && props.temp.is_none() && props.salinity.is_none() {
            return None;
        }

        Some(OceanRecord {
            source_name: "DMI Ocean".to_string(),
            wave_height: props.value,
            water_temperature: props.temp,
            salinity: props.salinity,
            location: Some(station_label(feature, ctx)),
            timestamp: observed_at(feature, ctx),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DmiSeaLevel;

impl Transformer for DmiSeaLevel {
    type Raw = ObservationCollection;
    type Record = SeaLevelRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::SeaLevel;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<SeaLevelRecord> {
        let feature = raw.first()?;
        Some(SeaLevelRecord {
            source_name: "DMI Sea Level".to_string(),
            sea_level: feature.properties.value?,
            location: Some(station_label(feature, ctx)),
            timestamp: observed_at(feature, ctx),
        })
    }
}

/// Marine forecast from the forecastedr position query.
#[derive(Debug, Default, Clone, Copy)]
pub struct DmiMarineForecast;

impl DmiMarineForecast {
    fn wind_text(prefix: &str, speed: f64) -> String {
        if speed > 0.0 {
            format!("{} - Wind {:.1} m/s", prefix, speed)
        } else {
            format!("{} - Calm", prefix)
        }
    }
}

impl Transformer for DmiMarineForecast {
    type Raw = CoverageJson;
    type Record = ForecastRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::Forecast;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<ForecastRecord> {
        let points = marine_series(raw);
        let first = points.first()?;

        let dates = series_dates(&points);
        let today = dates.first().and_then(|d| water_temperature_range(&points, *d));
        let tomorrow_date = dates.get(1).copied();
        let tomorrow = tomorrow_date.and_then(|d| water_temperature_range(&points, d));
        let tomorrow_first = tomorrow_date.and_then(|date| {
            points.iter().find(|p| point_date(p) == Some(date))
        });

        Some(ForecastRecord {
            source_name: "DMI Marine Forecast".to_string(),
            temperature: first.water_temperature,
            description: Some(Self::wind_text("Marine conditions", first.wind_speed)),
            icon: None,
            high_temp: today.map(|(_, hi)| hi),
            low_temp: today.map(|(lo, _)| lo),
            precipitation_chance: None,
            tomorrow_high_temp: tomorrow.map(|(_, hi)| hi),
            tomorrow_low_temp: tomorrow.map(|(lo, _)| lo),
            tomorrow_description: tomorrow_first
                .map(|p| Self::wind_text("Marine forecast", p.wind_speed)),
            tomorrow_precip_chance: None,
            location: Some(ctx.fallback_location()),
            timestamp: first.time.clone(),
            series: points,
        })
    }
}

/// Strikes in the trailing window of the lightningdata query.
///
/// An empty collection is no-data: no activity gives no record.
#[derive(Debug, Default, Clone, Copy)]
pub struct DmiLightning;

impl Transformer for DmiLightning {
    type Raw = ObservationCollection;
    type Record = LightningRecord;

    const PROVIDER: Provider = Provider::Dmi;
    const PHENOMENON: Phenomenon = Phenomenon::Lightning;

    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<LightningRecord> {
        if raw.is_empty() {
            return None;
        }
        let count = u32::try_from(raw.features.len()).unwrap_or(u32::MAX);

        let latest = raw
            .features
            .iter()
            .max_by_key(|f| f.properties.observed.as_deref().and_then(parse_iso8601))?;

        let nearest = raw
            .features
            .iter()
            .filter_map(ObservationFeature::position)
            .map(|p| ctx.coords.distance_km(&p))
            .reduce(f64::min);

        Some(LightningRecord {
            strike_count: count,
            area_strike_count: Some(count),
            last_strike_time: latest.properties.observed.as_deref().map(normalize_iso),
            distance: latest.properties.distance.or(nearest),
            intensity: latest.properties.amp.or(latest.properties.value),
            risk_level: RiskLevel::from_strike_count(count),
            location: Some(format!("Lightning Area ({} strikes)", count)),
            timestamp: ctx.now_iso(),
        })
    }
}
