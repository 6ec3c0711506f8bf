//! Per-location aggregation and the location fan-out.
//!
//! For one location every provider call is started at once and all of
//! them are awaited, success or failure, before the bundle is built. Each
//! success goes through its transformer, each failure through the error
//! classifier. Nothing escapes a slot: the caller always gets a bundle.

pub mod bundle;

use std::time::Instant;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use metrics::{counter, histogram};
use providers::Clients;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};
use transformers::dmi::{
    DmiLightning, DmiMarineForecast, DmiOcean, DmiSeaLevel, DmiTemperature, DmiWind,
};
use transformers::openweather::{OpenWeatherForecast, OpenWeatherTemperature, OpenWeatherWind};
use transformers::weatherapi::{WeatherApiForecast, WeatherApiTemperature, WeatherApiWind};
use transformers::{TransformContext, Transformer};
use wx_common::{classify_fetch_error, no_data, FetchResult, Location};

pub use bundle::{BundleError, LocationBundle, Outcome, SourceEntry};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// The pass was cancelled; no bundle was delivered.
    #[error("aggregation cancelled")]
    Cancelled,
}

/// Runs aggregation passes over a fixed set of provider clients.
#[derive(Debug, Clone)]
pub struct Aggregator {
    clients: Clients,
}

impl Aggregator {
    pub fn new(clients: Clients) -> Self {
        Self { clients }
    }

    /// Aggregate one location against the current time.
    pub async fn aggregate(&self, location: &Location) -> LocationBundle {
        self.aggregate_at(location, Utc::now()).await
    }

    /// Aggregate one location with `now` as the reference instant for the
    /// lightning window and timestamp fallbacks.
    #[instrument(skip(self, location), fields(location = %location.name))]
    pub async fn aggregate_at(&self, location: &Location, now: DateTime<Utc>) -> LocationBundle {
        let started = Instant::now();
        let coords = location.coords;
        let ctx = TransformContext::new(coords, now);
        let Clients {
            dmi,
            openweather,
            weatherapi,
        } = &self.clients;

        let (
            dmi_wind,
            dmi_temperature,
            dmi_ocean,
            dmi_sea_level,
            dmi_forecast,
            dmi_lightning,
            owm_current,
            owm_forecast,
            wapi_current,
            wapi_forecast,
        ) = tokio::join!(
            dmi.wind(coords),
            dmi.temperature(coords),
            dmi.ocean(coords),
            dmi.sea_level(coords),
            dmi.marine_forecast(coords),
            dmi.lightning(coords, now),
            openweather.current(coords),
            openweather.forecast(coords),
            weatherapi.current(coords),
            weatherapi.forecast(coords),
        );

        let mut bundle = LocationBundle::new(location);
        bundle.wind = vec![
            resolve(DmiWind, &dmi_wind, &ctx),
            resolve(OpenWeatherWind, &owm_current, &ctx),
            resolve(WeatherApiWind, &wapi_current, &ctx),
        ];
        bundle.temperature = vec![
            resolve(DmiTemperature, &dmi_temperature, &ctx),
            resolve(OpenWeatherTemperature, &owm_current, &ctx),
            resolve(WeatherApiTemperature, &wapi_current, &ctx),
        ];
        bundle.ocean = vec![resolve(DmiOcean, &dmi_ocean, &ctx)];
        bundle.sea_level = vec![resolve(DmiSeaLevel, &dmi_sea_level, &ctx)];
        bundle.forecast = vec![
            resolve(DmiMarineForecast, &dmi_forecast, &ctx),
            resolve(OpenWeatherForecast, &owm_forecast, &ctx),
            resolve(WeatherApiForecast, &wapi_forecast, &ctx),
        ];
        bundle.lightning = vec![resolve(DmiLightning, &dmi_lightning, &ctx)];
        let bundle = bundle.seal();

        let elapsed = started.elapsed();
        histogram!("wx_location_aggregation_seconds").record(elapsed.as_secs_f64());
        info!(
            entries = bundle.entry_count(),
            failed = bundle.failed_count(),
            all_failed = bundle.error.is_some(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Location aggregated"
        );
        bundle
    }

    /// Aggregate every location concurrently. Results follow the input
    /// order, not completion order.
    pub async fn get_weather_for_locations(&self, locations: &[Location]) -> Vec<LocationBundle> {
        let now = Utc::now();
        join_all(locations.iter().map(|l| self.aggregate_at(l, now))).await
    }

    /// As [`Self::aggregate`], abandoning outstanding calls on cancellation.
    pub async fn aggregate_cancellable(
        &self,
        location: &Location,
        token: &CancellationToken,
    ) -> Result<LocationBundle, AggregateError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(AggregateError::Cancelled),
            bundle = self.aggregate(location) => Ok(bundle),
        }
    }

    /// As [`Self::get_weather_for_locations`]; on cancellation every
    /// in-flight request is dropped and no bundle is returned.
    pub async fn get_weather_for_locations_cancellable(
        &self,
        locations: &[Location],
        token: &CancellationToken,
    ) -> Result<Vec<LocationBundle>, AggregateError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(AggregateError::Cancelled),
            bundles = self.get_weather_for_locations(locations) => Ok(bundles),
        }
    }
}

/// Turn one fetch result into a bundle entry.
fn resolve<T: Transformer>(
    transformer: T,
    result: &FetchResult<T::Raw>,
    ctx: &TransformContext,
) -> SourceEntry<T::Record> {
    let outcome = match result {
        Ok(raw) => match transformer.transform(raw, ctx) {
            Some(record) => Outcome::Ok { record },
            None => Outcome::NoData {
                descriptor: no_data(T::PHENOMENON, T::PROVIDER),
            },
        },
        Err(err) => {
            let descriptor = classify_fetch_error(err, T::PHENOMENON, T::PROVIDER);
            Outcome::Failed {
                category: descriptor.category,
                descriptor,
            }
        }
    };

    counter!(
        "wx_fetch_total",
        "provider" => T::PROVIDER.as_str(),
        "phenomenon" => T::PHENOMENON.as_str(),
        "outcome" => outcome.label()
    )
    .increment(1);

    SourceEntry {
        provider: T::PROVIDER,
        source_name: T::PROVIDER.display_name().to_string(),
        outcome,
    }
}
