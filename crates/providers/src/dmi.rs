//! DMI open data client (metObs, oceanObs, lightningdata, forecastedr).
//!
//! DMI is the only upstream behind the 429 retry policy.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use provider_schemas::coverage::CoverageJson;
use provider_schemas::dmi::{ObservationCollection, TemperatureObservations, WindObservations};
use provider_schemas::parameters::{self, FORECAST_PARAMETERS};
use provider_schemas::wkt;
use tokio::try_join;
use tracing::{debug, instrument, warn};
use wx_common::bbox::{margin, BoundingBox};
use wx_common::time::trailing_interval;
use wx_common::{Coordinates, FetchError, FetchResult, Provider};

use crate::client::{require_key, ApiClient};
use crate::config::DmiConfig;
use crate::retry::RetryPolicy;
use crate::transport::{HttpRequest, Transport};

pub const AUTH_HEADER: &str = "X-Gravitee-Api-Key";

/// Forecast collections in fallback order: North Sea/Baltic, then inner
/// Danish waters for near-shore points outside the first grid.
pub const FORECAST_COLLECTIONS: [&str; 2] = ["dkss_nsbs", "dkss_idw"];

const PRIMARY_LIMIT: u32 = 10;
const SECONDARY_LIMIT: u32 = 20;
const OCEAN_LIMIT: u32 = 50;
const LIGHTNING_LIMIT: u32 = 100;
const LIGHTNING_WINDOW_HOURS: i64 = 2;

#[derive(Debug, Clone)]
pub struct DmiClient {
    api: ApiClient,
    config: DmiConfig,
}

impl DmiClient {
    pub fn new(config: DmiConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_retry(config, transport, RetryPolicy::default())
    }

    pub fn with_retry(
        config: DmiConfig,
        transport: Arc<dyn Transport>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            api: ApiClient::new(Provider::Dmi, transport, retry),
            config,
        }
    }

    fn met_obs_url(&self) -> String {
        format!("{}/v2/metObs/collections/observation/items", self.config.base_url)
    }

    async fn met_obs(
        &self,
        parameter_id: &str,
        bbox: &BoundingBox,
        limit: u32,
    ) -> FetchResult<ObservationCollection> {
        let key = require_key(self.config.met_obs_key.as_ref(), Provider::Dmi)?;
        let request = HttpRequest::get(self.met_obs_url())
            .query("parameterId", parameter_id)
            .query("bbox", bbox.to_query_string())
            .query("limit", limit)
            .header(AUTH_HEADER, key);
        self.api.get_json(request).await
    }

    /// A secondary parameter: failures are logged and read as absent.
    async fn secondary(
        &self,
        parameter_id: &str,
        bbox: &BoundingBox,
    ) -> FetchResult<Option<ObservationCollection>> {
        match self.met_obs(parameter_id, bbox, SECONDARY_LIMIT).await {
            Ok(collection) => Ok(Some(collection)),
            Err(FetchError::MissingApiKey { provider }) => {
                Err(FetchError::MissingApiKey { provider })
            }
            Err(e) => {
                warn!(parameter = parameter_id, error = %e, "Secondary parameter fetch failed");
                Ok(None)
            }
        }
    }

    /// Wind speed with direction and gust matched by station.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn wind(&self, coords: Coordinates) -> FetchResult<WindObservations> {
        let bbox = BoundingBox::around(coords, margin::WIND_TEMPERATURE);
        let (speed, direction, gust) = try_join!(
            self.met_obs(parameters::WIND_SPEED, &bbox, PRIMARY_LIMIT),
            self.secondary(parameters::WIND_DIR, &bbox),
            self.secondary(parameters::WIND_GUST, &bbox),
        )?;
        Ok(WindObservations {
            speed,
            direction,
            gust,
        })
    }

    /// Dry-bulb temperature with humidity and pressure matched by station.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn temperature(&self, coords: Coordinates) -> FetchResult<TemperatureObservations> {
        let bbox = BoundingBox::around(coords, margin::WIND_TEMPERATURE);
        let (temperature, humidity, pressure) = try_join!(
            self.met_obs(parameters::TEMP_DRY, &bbox, PRIMARY_LIMIT),
            self.secondary(parameters::HUMIDITY, &bbox),
            self.secondary(parameters::PRESSURE, &bbox),
        )?;
        Ok(TemperatureObservations {
            temperature,
            humidity,
            pressure,
        })
    }

    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn sea_level(&self, coords: Coordinates) -> FetchResult<ObservationCollection> {
        let bbox = BoundingBox::around(coords, margin::SEA_LEVEL);
        self.met_obs(parameters::SEA_LEVEL, &bbox, PRIMARY_LIMIT).await
    }

    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn ocean(&self, coords: Coordinates) -> FetchResult<ObservationCollection> {
        let key = require_key(self.config.ocean_obs_key.as_ref(), Provider::Dmi)?;
        let bbox = BoundingBox::around(coords, margin::OCEAN);
        let request = HttpRequest::get(format!(
            "{}/v2/oceanObs/collections/observation/items",
            self.config.base_url
        ))
        .query("bbox", bbox.to_query_string())
        .query("limit", OCEAN_LIMIT)
        .header(AUTH_HEADER, key);
        self.api.get_json(request).await
    }

    /// Strikes in the trailing two hours before `now`.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn lightning(
        &self,
        coords: Coordinates,
        now: DateTime<Utc>,
    ) -> FetchResult<ObservationCollection> {
        let key = require_key(self.config.lightning_key.as_ref(), Provider::Dmi)?;
        let bbox = BoundingBox::around(coords, margin::LIGHTNING);
        let request = HttpRequest::get(format!(
            "{}/v2/lightningdata/collections/observation/items",
            self.config.base_url
        ))
        .query("bbox", bbox.to_query_string())
        .query("datetime", trailing_interval(now, LIGHTNING_WINDOW_HOURS))
        .query("limit", LIGHTNING_LIMIT)
        .header(AUTH_HEADER, key);
        self.api.get_json(request).await
    }

    /// Marine point forecast with collection fallback.
    ///
    /// Out-of-grid points come back as 200 with all-null ranges. The first
    /// collection holding any value wins; otherwise the last all-null
    /// coverage is returned (read as no-data), or the last error if no
    /// collection answered at all.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn marine_forecast(&self, coords: Coordinates) -> FetchResult<CoverageJson> {
        let key = require_key(self.config.forecast_key.as_ref(), Provider::Dmi)?;

        let mut empty: Option<CoverageJson> = None;
        let mut last_error: Option<FetchError> = None;

        for collection in FORECAST_COLLECTIONS {
            let request = HttpRequest::get(format!(
                "{}/v1/forecastedr/collections/{}/position",
                self.config.base_url, collection
            ))
            .query("coords", wkt::point(coords))
            .query("parameter-name", FORECAST_PARAMETERS.join(","))
            .header(AUTH_HEADER, key);

            match self.api.get_json::<CoverageJson>(request).await {
                Ok(coverage) if coverage.has_valid_data() => {
                    debug!(collection = collection, "Forecast collection has data");
                    return Ok(coverage);
                }
                Ok(coverage) => {
                    debug!(collection = collection, "Forecast collection returned only nulls");
                    empty = Some(coverage);
                }
                Err(e) => {
                    warn!(collection = collection, error = %e, "Forecast collection failed");
                    last_error = Some(e);
                }
            }
        }

        match (empty, last_error) {
            (Some(coverage), _) => Ok(coverage),
            (None, Some(e)) => Err(e),
            (None, None) => Ok(CoverageJson::default()),
        }
    }
}
