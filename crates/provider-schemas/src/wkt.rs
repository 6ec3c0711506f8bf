//! WKT point geometry for EDR position queries.

use wx_common::Coordinates;

/// Format a point as `POINT(lon lat)`.
pub fn point(coords: Coordinates) -> String {
    format!("POINT({} {})", coords.lon, coords.lat)
}
