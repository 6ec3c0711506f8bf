//! Application state for the weather API.

use std::sync::Arc;

use aggregator::Aggregator;
use metrics_exporter_prometheus::PrometheusHandle;
use providers::{Clients, ProvidersConfig, ReqwestTransport, Transport};
use wx_common::LocationsConfig;

/// Shared application state.
pub struct AppState {
    pub aggregator: Aggregator,

    /// Configured locations, in display order.
    pub locations: LocationsConfig,

    /// Renders `/metrics`; absent when no recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State over the production reqwest transport.
    pub fn new(
        config: &ProvidersConfig,
        locations: LocationsConfig,
        metrics: Option<PrometheusHandle>,
    ) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(
            config,
            Arc::new(transport),
            locations,
            metrics,
        ))
    }

    pub fn with_transport(
        config: &ProvidersConfig,
        transport: Arc<dyn Transport>,
        locations: LocationsConfig,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            aggregator: Aggregator::new(Clients::new(config, transport)),
            locations,
            metrics,
        }
    }
}
