//! Recorded provider payloads.
//!
//! Each constant names a JSON file under `testdata/`. The payloads are
//! trimmed real responses for a point off Hvide Sande (56.0°N, 8.13°E).

use serde::de::DeserializeOwned;

use crate::paths::testdata_dir;

pub const DMI_WIND_SPEED: &str = "dmi_wind_speed.json";
pub const DMI_WIND_DIR: &str = "dmi_wind_dir.json";
pub const DMI_WIND_GUST: &str = "dmi_wind_max.json";
pub const DMI_TEMP_DRY: &str = "dmi_temp_dry.json";
pub const DMI_HUMIDITY: &str = "dmi_humidity.json";
pub const DMI_PRESSURE: &str = "dmi_pressure.json";
pub const DMI_SEA_LEVEL: &str = "dmi_sea_reg.json";
pub const DMI_OCEAN: &str = "dmi_ocean_obs.json";
pub const DMI_LIGHTNING: &str = "dmi_lightning.json";
pub const DMI_FORECAST: &str = "dmi_forecast_dkss_nsbs.json";
pub const DMI_FORECAST_NULLS: &str = "dmi_forecast_nulls.json";
pub const DMI_EMPTY: &str = "dmi_empty.json";
pub const OPENWEATHER_CURRENT: &str = "openweather_current.json";
pub const OPENWEATHER_FORECAST: &str = "openweather_forecast.json";
pub const WEATHERAPI_CURRENT: &str = "weatherapi_current.json";
pub const WEATHERAPI_FORECAST: &str = "weatherapi_forecast.json";

/// Raw fixture text. Panics if the file is missing.
pub fn load_fixture(name: &str) -> String {
    let path = testdata_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Fixture decoded into a typed payload. Panics on decode errors.
pub fn fixture<T: DeserializeOwned>(name: &str) -> T {
    serde_json::from_str(&load_fixture(name))
        .unwrap_or_else(|e| panic!("failed to decode fixture {}: {}", name, e))
}
