//! Weather API Service Library
//!
//! A thin HTTP shell over the aggregator: loads provider configuration and
//! the location list, and serves result bundles as JSON.

pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/weather", get(handlers::weather::all_locations_handler))
        .route(
            "/api/weather/:name",
            get(handlers::weather::location_handler),
        )
        .route("/api/locations", get(handlers::weather::locations_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
