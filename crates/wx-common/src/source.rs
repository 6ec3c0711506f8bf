//! Keys identifying a (phenomenon, provider) slot in a result bundle.

use serde::{Deserialize, Serialize};

/// A weather phenomenon with its own canonical record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phenomenon {
    Wind,
    Temperature,
    Ocean,
    SeaLevel,
    Forecast,
    Lightning,
}

impl Phenomenon {
    pub const ALL: [Phenomenon; 6] = [
        Phenomenon::Wind,
        Phenomenon::Temperature,
        Phenomenon::Ocean,
        Phenomenon::SeaLevel,
        Phenomenon::Forecast,
        Phenomenon::Lightning,
    ];

    /// Stable identifier used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phenomenon::Wind => "wind",
            Phenomenon::Temperature => "temperature",
            Phenomenon::Ocean => "ocean",
            Phenomenon::SeaLevel => "sea-level",
            Phenomenon::Forecast => "forecast",
            Phenomenon::Lightning => "lightning",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phenomenon::Wind => "Wind",
            Phenomenon::Temperature => "Temperature",
            Phenomenon::Ocean => "Ocean",
            Phenomenon::SeaLevel => "Sea Level",
            Phenomenon::Forecast => "Forecast",
            Phenomenon::Lightning => "Lightning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Phenomenon::Wind => "💨",
            Phenomenon::Temperature => "🌡️",
            Phenomenon::Ocean => "🌊",
            Phenomenon::SeaLevel => "📏",
            Phenomenon::Forecast => "🔮",
            Phenomenon::Lightning => "⚡",
        }
    }
}

impl std::fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An upstream data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Danish Meteorological Institute open data APIs.
    Dmi,
    /// OpenWeatherMap.
    OpenWeatherMap,
    /// WeatherAPI.com.
    WeatherApi,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Dmi, Provider::OpenWeatherMap, Provider::WeatherApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Dmi => "dmi",
            Provider::OpenWeatherMap => "openweathermap",
            Provider::WeatherApi => "weatherapi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Dmi => "DMI",
            Provider::OpenWeatherMap => "OpenWeatherMap",
            Provider::WeatherApi => "WeatherAPI.com",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for provider in Provider::ALL {
            let json = serde_json::to_value(provider).unwrap();
            assert_eq!(json, provider.as_str());
        }
        for phenomenon in Phenomenon::ALL {
            let json = serde_json::to_value(phenomenon).unwrap();
            assert_eq!(json, phenomenon.as_str());
        }
    }
}
