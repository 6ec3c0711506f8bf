//! Canonical, provider-agnostic records, one per phenomenon.
//!
//! Field names serialize in camelCase and absent optionals are omitted.

use serde::{Deserialize, Serialize};
use wx_common::units::{direction, speed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindRecord {
    pub source_name: String,
    /// m/s
    pub wind_speed: f64,
    /// Degrees in `[0, 360)`, 0 = North.
    pub wind_direction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    /// hPa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
}

impl WindRecord {
    pub fn category(&self) -> speed::WindCategory {
        speed::wind_category(self.wind_speed)
    }

    pub fn compass(&self) -> &'static str {
        direction::compass_point(self.wind_direction)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRecord {
    pub source_name: String,
    /// °C
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    /// %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_cover: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OceanRecord {
    pub source_name: String,
    /// m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    /// °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    /// PSU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaLevelRecord {
    pub source_name: String,
    /// cm relative to mean sea level, signed.
    pub sea_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
}

/// One valid point of a marine forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineForecastPoint {
    pub time: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Absolute icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_temp: Option<f64>,
    /// 0..100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomorrow_high_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomorrow_low_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomorrow_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomorrow_precip_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
    /// Marine time series; empty for the daily-forecast providers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<MarineForecastPoint>,
}

/// Lightning risk tier for the trailing observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// Tier for a strike count. Monotonic: more strikes never lower the tier.
    pub fn from_strike_count(count: u32) -> Self {
        match count {
            0..=5 => RiskLevel::Low,
            6..=10 => RiskLevel::Moderate,
            11..=25 => RiskLevel::High,
            _ => RiskLevel::Extreme,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Extreme => "extreme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningRecord {
    pub strike_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_strike_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_strike_time: Option<String>,
    /// km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tiers() {
        assert_eq!(RiskLevel::from_strike_count(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_strike_count(5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_strike_count(6), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_strike_count(10), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_strike_count(11), RiskLevel::High);
        assert_eq!(RiskLevel::from_strike_count(25), RiskLevel::High);
        assert_eq!(RiskLevel::from_strike_count(26), RiskLevel::Extreme);
    }

    #[test]
    fn test_risk_is_monotonic() {
        let mut previous = RiskLevel::Low;
        for count in 0..200 {
            let level = RiskLevel::from_strike_count(count);
            assert!(level >= previous, "tier dropped at {}", count);
            previous = level;
        }
    }

    #[test]
    fn test_wind_record_serializes_camel_case_without_absent_fields() {
        let record = WindRecord {
            source_name: "DMI".to_string(),
            wind_speed: 7.5,
            wind_direction: 270.0,
            wind_gust: None,
            pressure: None,
            location: Some("06180".to_string()),
            timestamp: "2024-01-15T12:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sourceName"], "DMI");
        assert_eq!(json["windDirection"], 270.0);
        assert!(json.get("windGust").is_none());
        assert_eq!(record.compass(), "W");
    }
}
