//! DMI observation responses (GeoJSON FeatureCollection).
//!
//! The same envelope is used by metObs, oceanObs and lightningdata; the
//! property set differs per product so all of them are optional here.

use serde::{Deserialize, Serialize};
use wx_common::Coordinates;

/// A GeoJSON FeatureCollection of station observations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObservationCollection {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub features: Vec<ObservationFeature>,

    #[serde(rename = "numberReturned", default)]
    pub number_returned: Option<u64>,
}

impl ObservationCollection {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// First feature in response order.
    pub fn first(&self) -> Option<&ObservationFeature> {
        self.features.first()
    }

    /// First feature reported by the given station.
    pub fn for_station(&self, station_id: &str) -> Option<&ObservationFeature> {
        self.features
            .iter()
            .find(|f| f.properties.station_id.as_deref() == Some(station_id))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObservationFeature {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub geometry: Option<PointGeometry>,

    #[serde(default)]
    pub properties: ObservationProperties,
}

impl ObservationFeature {
    /// Feature position, if the geometry carries `[lon, lat]`.
    pub fn position(&self) -> Option<Coordinates> {
        self.geometry.as_ref().and_then(PointGeometry::coordinates)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PointGeometry {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl PointGeometry {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self.coordinates.as_slice() {
            [lon, lat, ..] => Some(Coordinates::new(*lat, *lon)),
            _ => None,
        }
    }
}

/// Union of the observation property sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationProperties {
    #[serde(default)]
    pub parameter_id: Option<String>,

    #[serde(default)]
    pub station_id: Option<String>,

    /// Observation time, ISO-8601.
    #[serde(default)]
    pub observed: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub value: Option<f64>,

    // oceanObs extras
    #[serde(default)]
    pub temp: Option<f64>,

    #[serde(default)]
    pub salinity: Option<f64>,

    // lightningdata extras
    /// Peak current in kA.
    #[serde(default)]
    pub amp: Option<f64>,

    #[serde(default)]
    pub strokes: Option<u32>,

    /// Distance to the strike in km, when the upstream supplies it.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Responses of a multi-parameter wind query: `wind_speed` selects the
/// station, direction and gust are matched to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindObservations {
    pub speed: ObservationCollection,
    /// `None` when the secondary fetch failed.
    pub direction: Option<ObservationCollection>,
    pub gust: Option<ObservationCollection>,
}

/// Responses of a multi-parameter temperature query: `temp_dry` selects the
/// station, humidity and pressure are matched to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureObservations {
    pub temperature: ObservationCollection,
    pub humidity: Option<ObservationCollection>,
    pub pressure: Option<ObservationCollection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_met_obs() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": "abc",
                "geometry": {"type": "Point", "coordinates": [12.6, 55.7]},
                "properties": {
                    "parameterId": "wind_speed",
                    "stationId": "06180",
                    "observed": "2024-01-15T12:00:00Z",
                    "value": 7.4
                }
            }],
            "numberReturned": 1
        }"#;
        let c: ObservationCollection = serde_json::from_str(json).unwrap();
        let f = c.first().unwrap();
        assert_eq!(f.properties.station_id.as_deref(), Some("06180"));
        assert_eq!(f.properties.value, Some(7.4));
        let pos = f.position().unwrap();
        assert_eq!(pos.lat, 55.7);
        assert_eq!(pos.lon, 12.6);
    }

    #[test]
    fn test_decode_tolerates_missing_members() {
        let c: ObservationCollection = serde_json::from_str(r#"{"features": [{}]}"#).unwrap();
        assert_eq!(c.features.len(), 1);
        assert!(c.first().unwrap().position().is_none());

        let empty: ObservationCollection = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_for_station() {
        let json = r#"{"features": [
            {"properties": {"stationId": "A", "value": 1.0}},
            {"properties": {"stationId": "B", "value": 2.0}}
        ]}"#;
        let c: ObservationCollection = serde_json::from_str(json).unwrap();
        assert_eq!(c.for_station("B").unwrap().properties.value, Some(2.0));
        assert!(c.for_station("C").is_none());
    }
}
