//! Error type for provider fetches.

use thiserror::Error;

use crate::source::Provider;

/// Result type alias using FetchError.
pub type FetchResult<T> = Result<T, FetchError>;

/// Everything that can go wrong between issuing a provider request and
/// holding its decoded body.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Required API key is absent; no network call was made.
    #[error("Missing API key for {provider}")]
    MissingApiKey { provider: Provider },

    /// Upstream answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, url: String },

    /// Connection refused, DNS failure and other transport faults.
    #[error("network error: {0}")]
    Network(String),

    #[error("request timeout: {0}")]
    Timeout(String),

    /// Body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_carries_code() {
        let err = FetchError::Status {
            status: 429,
            url: "https://example.com".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 429");
        assert!(err.is_rate_limited());
    }
}
