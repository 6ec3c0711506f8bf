//! Provider configuration: API keys, base URLs and the transport timeout.
//!
//! Read once at startup and passed by value into each client. Keys are
//! never resolved lazily; an absent key is reported per call as a
//! configuration error for that provider only.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DMI_BASE_URL: &str = "https://dmigw.govcloud.dk";
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_WEATHERAPI_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// DMI issues one key per API product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DmiConfig {
    pub base_url: String,
    pub met_obs_key: Option<String>,
    pub ocean_obs_key: Option<String>,
    pub lightning_key: Option<String>,
    pub forecast_key: Option<String>,
}

/// A provider authenticated by a single query-parameter key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyedApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub dmi: DmiConfig,
    pub openweather: KeyedApiConfig,
    pub weatherapi: KeyedApiConfig,
    /// Applied by the HTTP transport to every request.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ProvidersConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let base = |name: &str, default: &str| {
            var(name)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        let met_obs_key = var("DMI_MET_OBS_API_KEY");
        let forecast_key = var("DMI_FORECAST_API_KEY").or_else(|| met_obs_key.clone());

        let request_timeout = var("WX_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            dmi: DmiConfig {
                base_url: base("DMI_BASE_URL", DEFAULT_DMI_BASE_URL),
                met_obs_key,
                ocean_obs_key: var("DMI_OCEAN_OBS_API_KEY"),
                lightning_key: var("DMI_LIGHTNING_API_KEY"),
                forecast_key,
            },
            openweather: KeyedApiConfig {
                base_url: base("OPENWEATHER_BASE_URL", DEFAULT_OPENWEATHER_BASE_URL),
                api_key: var("OPENWEATHER_API_KEY"),
            },
            weatherapi: KeyedApiConfig {
                base_url: base("WEATHERAPI_BASE_URL", DEFAULT_WEATHERAPI_BASE_URL),
                api_key: var("WEATHERAPI_KEY"),
            },
            request_timeout: Duration::from_secs(request_timeout),
        }
    }

    /// Names of providers with no usable key at all, for startup logging.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.dmi.met_obs_key.is_none() {
            missing.push("DMI_MET_OBS_API_KEY");
        }
        if self.dmi.ocean_obs_key.is_none() {
            missing.push("DMI_OCEAN_OBS_API_KEY");
        }
        if self.dmi.lightning_key.is_none() {
            missing.push("DMI_LIGHTNING_API_KEY");
        }
        if self.openweather.api_key.is_none() {
            missing.push("OPENWEATHER_API_KEY");
        }
        if self.weatherapi.api_key.is_none() {
            missing.push("WEATHERAPI_KEY");
        }
        missing
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
