//! Failure descriptors and the error classifier.
//!
//! Every failed or empty provider slot is reduced to a fully populated
//! [`FailureDescriptor`] so consumers never null-check. Classification is
//! deterministic: the same error always yields the same descriptor.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::FetchError;
use crate::source::{Phenomenon, Provider};

/// Failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureCategory {
    /// Precondition failure, no network attempt made.
    ConfigError,
    /// HTTP 429 after retries were exhausted.
    RateLimited,
    /// Network or transport failure.
    Offline,
    GenericError,
    /// Successful response with nothing usable in it. Not an error.
    NoData,
}

impl FailureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::ConfigError => "config-error",
            FailureCategory::RateLimited => "rate-limited",
            FailureCategory::Offline => "offline",
            FailureCategory::GenericError => "generic-error",
            FailureCategory::NoData => "no-data",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, FailureCategory::NoData)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Blue,
    Gray,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub color: BadgeColor,
}

impl Badge {
    fn new(text: &str, color: BadgeColor) -> Self {
        Self {
            text: text.to_string(),
            color,
        }
    }
}

/// Display-ready description of why a slot holds no record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDescriptor {
    pub category: FailureCategory,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub badge: Option<Badge>,
    /// Whether trying again later may succeed.
    pub retryable: bool,
}

/// Classify a typed fetch error.
pub fn classify_fetch_error(
    err: &FetchError,
    phenomenon: Phenomenon,
    provider: Provider,
) -> FailureDescriptor {
    let category = match err {
        FetchError::MissingApiKey { .. } => FailureCategory::ConfigError,
        FetchError::Status { status: 429, .. } => FailureCategory::RateLimited,
        FetchError::Network(_) | FetchError::Timeout(_) => FailureCategory::Offline,
        FetchError::Status { .. } | FetchError::Decode(_) | FetchError::Cancelled => {
            FailureCategory::GenericError
        }
    };
    log_failure(category, phenomenon, provider, &err.to_string());
    describe(category, phenomenon, provider)
}

/// Classify an arbitrary error by its message. First match wins:
/// a 429 indicator, then network/transport keywords, then generic.
pub fn classify_message(
    message: &str,
    phenomenon: Phenomenon,
    provider: Provider,
) -> FailureDescriptor {
    let lower = message.to_lowercase();
    let category = if lower.contains("429") {
        FailureCategory::RateLimited
    } else if OFFLINE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        FailureCategory::Offline
    } else {
        FailureCategory::GenericError
    };
    log_failure(category, phenomenon, provider, message);
    describe(category, phenomenon, provider)
}

const OFFLINE_KEYWORDS: &[&str] = &[
    "fetch",
    "network",
    "enotfound",
    "timeout",
    "timed out",
    "connection",
    "dns",
];

/// Descriptor for a successful response that carried no usable feature.
pub fn no_data(phenomenon: Phenomenon, provider: Provider) -> FailureDescriptor {
    debug!(
        phenomenon = phenomenon.as_str(),
        provider = provider.as_str(),
        "Provider returned no data"
    );
    describe(FailureCategory::NoData, phenomenon, provider)
}

fn log_failure(category: FailureCategory, phenomenon: Phenomenon, provider: Provider, err: &str) {
    match category {
        FailureCategory::ConfigError | FailureCategory::RateLimited => warn!(
            category = category.as_str(),
            phenomenon = phenomenon.as_str(),
            provider = provider.as_str(),
            error = %err,
            "Provider fetch failed"
        ),
        _ => error!(
            category = category.as_str(),
            phenomenon = phenomenon.as_str(),
            provider = provider.as_str(),
            error = %err,
            "Provider fetch failed"
        ),
    }
}

fn describe(
    category: FailureCategory,
    phenomenon: Phenomenon,
    provider: Provider,
) -> FailureDescriptor {
    let api = provider.display_name();
    let name = phenomenon.display_name();
    let kind = phenomenon.as_str().replace('-', " ");

    let (title, description, badge, retryable) = match category {
        FailureCategory::ConfigError => (
            format!("{} Not Configured", api),
            format!("No API key is configured for {}", api),
            Badge::new("Config Error", BadgeColor::Red),
            false,
        ),
        FailureCategory::RateLimited => (
            format!("{} API Rate Limited", api),
            format!("{} API is currently rate limited. Please try again later.", api),
            Badge::new("Rate Limited", BadgeColor::Yellow),
            true,
        ),
        FailureCategory::Offline => (
            format!("No {} {} Data", api, name),
            format!("Unable to fetch {} data from {} API", kind, api),
            Badge::new("API Offline", BadgeColor::Red),
            true,
        ),
        FailureCategory::GenericError => (
            format!("No {} {} Data", api, name),
            format!("Unable to fetch {} data from {} API", kind, api),
            Badge::new("API Error", BadgeColor::Red),
            false,
        ),
        FailureCategory::NoData => (
            format!("No {} {} Data", api, name),
            format!("No {} measurements available from {} for this location", kind, api),
            Badge::new("No Data", BadgeColor::Gray),
            true,
        ),
    };

    FailureDescriptor {
        category,
        icon: phenomenon.icon().to_string(),
        title,
        description,
        badge: Some(badge),
        retryable,
    }
}
