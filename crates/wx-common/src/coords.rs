//! Geographic query points.

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers for distance calculations.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 query point in degrees.
///
/// Not validated beyond being finite; it only identifies where to ask
/// the upstreams for data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Location label used when a provider omits the station or place name.
    pub fn fallback_label(&self) -> String {
        format!("{:.3}°N, {:.3}°E", self.lat, self.lon)
    }

    /// Great-circle distance to another point in kilometers (haversine).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}
