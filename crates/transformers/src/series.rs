//! Time-series helpers shared by the forecast transformers.

use chrono::{DateTime, NaiveDate, Utc};
use provider_schemas::coverage::CoverageJson;
use provider_schemas::parameters::{
    FORECAST_SEA_LEVEL, FORECAST_WATER_TEMP, FORECAST_WIND_U, FORECAST_WIND_V,
};
use wx_common::time::{normalize_iso, parse_iso8601};

use crate::records::MarineForecastPoint;
use crate::wind::WindVector;

/// Index used for "tomorrow" when no date boundary is found: 8 steps of a
/// 3-hourly series is roughly 24 hours.
pub const TOMORROW_FALLBACK_OFFSET: usize = 8;

/// Pick the "tomorrow" entry of a forecast list.
///
/// Today is the first element. Tomorrow is the first later element whose
/// UTC calendar date differs from today's, falling back to
/// [`TOMORROW_FALLBACK_OFFSET`] when the series never crosses midnight.
/// Elements without a time never match.
pub fn tomorrow_index<T>(
    items: &[T],
    time_of: impl Fn(&T) -> Option<DateTime<Utc>>,
) -> Option<usize> {
    let today = items.first().and_then(&time_of).map(|t| t.date_naive());

    let boundary = today.and_then(|today| {
        items
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, item)| {
                time_of(*item)
                    .map(|t| t.date_naive())
                    .is_some_and(|d| d != today)
            })
            .map(|(i, _)| i)
    });

    boundary.or_else(|| {
        (TOMORROW_FALLBACK_OFFSET < items.len()).then_some(TOMORROW_FALLBACK_OFFSET)
    })
}

/// Zip the coverage time axis with the marine ranges by index.
///
/// A point is kept only when both wind components are present; null
/// points are dropped, never zero-filled.
pub fn marine_series(coverage: &CoverageJson) -> Vec<MarineForecastPoint> {
    coverage
        .time_values()
        .iter()
        .enumerate()
        .filter_map(|(i, time)| {
            let u = coverage.value_at(FORECAST_WIND_U, i)?;
            let v = coverage.value_at(FORECAST_WIND_V, i)?;
            let wind = WindVector::from_components(u, v);
            Some(MarineForecastPoint {
                time: normalize_iso(time),
                wind_speed: wind.speed,
                wind_direction: wind.direction,
                water_temperature: coverage.value_at(FORECAST_WATER_TEMP, i),
                sea_level: coverage.value_at(FORECAST_SEA_LEVEL, i),
            })
        })
        .collect()
}

/// Min and max water temperature over the points on a given UTC date.
pub fn water_temperature_range(
    points: &[MarineForecastPoint],
    date: NaiveDate,
) -> Option<(f64, f64)> {
    points
        .iter()
        .filter(|p| point_date(p) == Some(date))
        .filter_map(|p| p.water_temperature)
        .fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
}

/// Distinct UTC dates of a series, in order of first appearance.
pub fn series_dates(points: &[MarineForecastPoint]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    for date in points.iter().filter_map(point_date) {
        if !dates.contains(&date) {
            dates.push(date);
        }
    }
    dates
}

pub(crate) fn point_date(point: &MarineForecastPoint) -> Option<NaiveDate> {
    parse_iso8601(&point.time).map(|t| t.date_naive())
}
