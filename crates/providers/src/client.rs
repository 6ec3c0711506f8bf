//! Request execution shared by every provider client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use wx_common::{FetchError, FetchResult, Provider};

use crate::retry::RetryPolicy;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Sends requests for one provider, applies its retry policy and decodes
/// JSON bodies.
#[derive(Clone)]
pub struct ApiClient {
    provider: Provider,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("provider", &self.provider)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ApiClient {
    pub fn new(provider: Provider, transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self {
            provider,
            transport,
            retry,
        }
    }

    /// Send with retry, returning the first non-retried response.
    pub async fn send(&self, request: &HttpRequest) -> FetchResult<HttpResponse> {
        let mut retries = 0;
        loop {
            let response = self.transport.send(request).await?;
            if !self.retry.should_retry(response.status, retries) {
                return Ok(response);
            }

            retries += 1;
            let delay = self.retry.delay_for(retries);
            warn!(
                provider = self.provider.as_str(),
                url = %request.display_url(),
                retry = retries,
                max_retries = self.retry.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Rate limited, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// GET and decode a JSON body. Non-2xx statuses become
    /// [`FetchError::Status`].
    pub async fn get_json<T: DeserializeOwned>(&self, request: HttpRequest) -> FetchResult<T> {
        let response = self.send(&request).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                url: request.display_url(),
            });
        }

        debug!(
            provider = self.provider.as_str(),
            url = %request.display_url(),
            bytes = response.body.len(),
            "Fetched"
        );
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Resolve a required key or fail before any request is built.
pub(crate) fn require_key(key: Option<&String>, provider: Provider) -> FetchResult<&str> {
    key.map(String::as_str)
        .filter(|k| !k.is_empty())
        .ok_or(FetchError::MissingApiKey { provider })
}
