//! WeatherAPI.com v1 responses (`/current.json`, `/forecast.json`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(default)]
    pub text: Option<String>,
    /// Protocol-relative URL, e.g. "//cdn.weatherapi.com/weather/64x64/day/113.png".
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Current {
    #[serde(default)]
    pub last_updated_epoch: Option<i64>,
    /// Local time, "YYYY-MM-DD HH:MM".
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub vis_km: Option<f64>,
    #[serde(default)]
    pub cloud: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub wind_degree: Option<f64>,
    #[serde(default)]
    pub gust_kph: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

/// `/current.json` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RealtimeResponse {
    #[serde(default)]
    pub location: Option<ApiLocation>,
    #[serde(default)]
    pub current: Option<Current>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Day {
    #[serde(default)]
    pub maxtemp_c: Option<f64>,
    #[serde(default)]
    pub mintemp_c: Option<f64>,
    /// 0..100
    #[serde(default)]
    pub daily_chance_of_rain: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub date_epoch: Option<i64>,
    #[serde(default)]
    pub day: Option<Day>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

/// `/forecast.json` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastResponse {
    #[serde(default)]
    pub location: Option<ApiLocation>,
    #[serde(default)]
    pub current: Option<Current>,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

/// Make a protocol-relative icon URL absolute.
pub fn absolute_icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{}", icon)
    } else {
        icon.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_icon_url() {
        assert_eq!(
            absolute_icon_url("//cdn.weatherapi.com/a.png"),
            "https://cdn.weatherapi.com/a.png"
        );
        assert_eq!(absolute_icon_url("https://x/a.png"), "https://x/a.png");
    }

    #[test]
    fn test_decode_integer_fields_as_float() {
        let json = r#"{"current": {"humidity": 81, "cloud": 75, "wind_degree": 240}}"#;
        let r: RealtimeResponse = serde_json::from_str(json).unwrap();
        let c = r.current.unwrap();
        assert_eq!(c.humidity, Some(81.0));
        assert_eq!(c.wind_degree, Some(240.0));
    }
}
