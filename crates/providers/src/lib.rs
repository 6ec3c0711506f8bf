//! Provider clients.
//!
//! Each client builds the provider's query (bounding box, WKT point or
//! native query string), attaches authentication and returns the decoded
//! body as a `provider-schemas` type. A missing key fails with
//! [`wx_common::FetchError::MissingApiKey`] before any request is issued.
//!
//! All network access goes through the [`Transport`] trait so clients can
//! be driven by a scripted transport in tests.

pub mod client;
pub mod config;
pub mod dmi;
pub mod openweather;
pub mod retry;
pub mod transport;
pub mod weatherapi;

use std::sync::Arc;

pub use client::ApiClient;
pub use config::{DmiConfig, KeyedApiConfig, ProvidersConfig};
pub use dmi::DmiClient;
pub use openweather::OpenWeatherClient;
pub use retry::RetryPolicy;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use weatherapi::WeatherApiClient;

/// The three clients over one shared transport.
#[derive(Debug, Clone)]
pub struct Clients {
    pub dmi: DmiClient,
    pub openweather: OpenWeatherClient,
    pub weatherapi: WeatherApiClient,
}

impl Clients {
    pub fn new(config: &ProvidersConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            dmi: DmiClient::new(config.dmi.clone(), transport.clone()),
            openweather: OpenWeatherClient::new(config.openweather.clone(), transport.clone()),
            weatherapi: WeatherApiClient::new(config.weatherapi.clone(), transport),
        }
    }
}
