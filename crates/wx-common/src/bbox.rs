//! Bounding box types used for station-based observation queries.

use serde::{Deserialize, Serialize};

use crate::coords::Coordinates;

/// Search margins in degrees around a query point.
///
/// Observations come from sparse physical stations, so each phenomenon
/// widens the box as far as its station density requires.
pub mod margin {
    /// Wind and temperature stations.
    pub const WIND_TEMPERATURE: f64 = 0.2;
    /// Lightning strike search area.
    pub const LIGHTNING: f64 = 0.5;
    /// Ocean observation buoys.
    pub const OCEAN: f64 = 1.0;
    /// Sea-level (tide gauge) station search.
    pub const SEA_LEVEL: f64 = 2.0;
}

/// A geographic bounding box in degrees, `[minLon, minLat, maxLon, maxLat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Expand a point by `margin` degrees in every direction.
    pub fn around(point: Coordinates, margin: f64) -> Self {
        Self {
            min_lon: point.lon - margin,
            min_lat: point.lat - margin,
            max_lon: point.lon + margin,
            max_lat: point.lat + margin,
        }
    }

    /// Render as the `bbox` query parameter value.
    pub fn to_query_string(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}
