//! WeatherAPI.com v1 client.

use std::sync::Arc;

use provider_schemas::weatherapi::{ForecastResponse, RealtimeResponse};
use tracing::instrument;
use wx_common::{Coordinates, FetchResult, Provider};

use crate::client::{require_key, ApiClient};
use crate::config::KeyedApiConfig;
use crate::retry::RetryPolicy;
use crate::transport::{HttpRequest, Transport};

/// Days requested from `/forecast.json`: today, tomorrow and one spare.
pub const FORECAST_DAYS: u32 = 3;

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api: ApiClient,
    config: KeyedApiConfig,
}

impl WeatherApiClient {
    pub fn new(config: KeyedApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: ApiClient::new(Provider::WeatherApi, transport, RetryPolicy::none()),
            config,
        }
    }

    fn request(&self, endpoint: &str, coords: Coordinates) -> FetchResult<HttpRequest> {
        let key = require_key(self.config.api_key.as_ref(), Provider::WeatherApi)?;
        Ok(HttpRequest::get(format!("{}/{}", self.config.base_url, endpoint))
            .query("key", key)
            .query("q", format!("{},{}", coords.lat, coords.lon))
            .query("aqi", "yes"))
    }

    /// Realtime conditions; feeds both the wind and temperature slots.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn current(&self, coords: Coordinates) -> FetchResult<RealtimeResponse> {
        let request = self.request("current.json", coords)?;
        self.api.get_json(request).await
    }

    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn forecast(&self, coords: Coordinates) -> FetchResult<ForecastResponse> {
        let request = self.request("forecast.json", coords)?.query("days", FORECAST_DAYS);
        self.api.get_json(request).await
    }
}
