//! OpenWeatherMap 2.5 client.

use std::sync::Arc;

use provider_schemas::openweather::{CurrentWeatherResponse, ForecastResponse};
use tracing::instrument;
use wx_common::{Coordinates, FetchResult, Provider};

use crate::client::{require_key, ApiClient};
use crate::config::KeyedApiConfig;
use crate::retry::RetryPolicy;
use crate::transport::{HttpRequest, Transport};

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api: ApiClient,
    config: KeyedApiConfig,
}

impl OpenWeatherClient {
    pub fn new(config: KeyedApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: ApiClient::new(Provider::OpenWeatherMap, transport, RetryPolicy::none()),
            config,
        }
    }

    fn request(&self, endpoint: &str, coords: Coordinates) -> FetchResult<HttpRequest> {
        let key = require_key(self.config.api_key.as_ref(), Provider::OpenWeatherMap)?;
        Ok(HttpRequest::get(format!("{}/{}", self.config.base_url, endpoint))
            .query("lat", coords.lat)
            .query("lon", coords.lon)
            .query("appid", key)
            .query("units", "metric"))
    }

    /// Current conditions; feeds both the wind and temperature slots.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn current(&self, coords: Coordinates) -> FetchResult<CurrentWeatherResponse> {
        let request = self.request("weather", coords)?;
        self.api.get_json(request).await
    }

    /// 5 day / 3 hour forecast.
    #[instrument(skip(self), fields(lat = coords.lat, lon = coords.lon))]
    pub async fn forecast(&self, coords: Coordinates) -> FetchResult<ForecastResponse> {
        let request = self.request("forecast", coords)?;
        self.api.get_json(request).await
    }
}
