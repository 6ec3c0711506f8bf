//! Weather bundle handlers.
//!
//! A client disconnect drops the handler future, which drops every
//! outstanding upstream request with it; a bundle is only serialized once
//! it is complete.

use std::sync::Arc;

use aggregator::LocationBundle;
use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::info;
use wx_common::Location;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/weather - Bundles for every configured location
pub async fn all_locations_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<LocationBundle>> {
    let locations = &state.locations.locations;
    info!(count = locations.len(), "Aggregating all locations");
    Json(state.aggregator.get_weather_for_locations(locations).await)
}

/// GET /api/weather/:name - Bundle for one location (name is case-insensitive)
pub async fn location_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<LocationBundle>, ApiError> {
    let location = state
        .locations
        .find(&name)
        .ok_or_else(|| ApiError::UnknownLocation {
            name: name.clone(),
            known: state.locations.locations.iter().map(|l| l.name.clone()).collect(),
        })?;

    Ok(Json(state.aggregator.aggregate(location).await))
}

/// GET /api/locations - The configured location list
pub async fn locations_handler(Extension(state): Extension<Arc<AppState>>) -> Json<Vec<Location>> {
    Json(state.locations.locations.clone())
}
