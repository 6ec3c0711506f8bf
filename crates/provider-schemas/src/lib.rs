//! Raw upstream response shapes.
//!
//! These types mirror what each provider actually sends, with every field
//! optional and defaulted so decoding never fails on an absent member.
//! Normalization into canonical records happens in the `transformers`
//! crate; nothing here interprets values.
//!
//! # Providers
//!
//! - DMI (Danish Meteorological Institute): GeoJSON observation collections
//!   for metObs, oceanObs and lightningdata, CoverageJSON for forecastedr
//! - OpenWeatherMap: current weather and 3-hourly forecast
//! - WeatherAPI.com: realtime and daily forecast

pub mod coverage;
pub mod dmi;
pub mod openweather;
pub mod weatherapi;
pub mod wkt;

pub use coverage::{Axis, CoverageJson, Domain, NdArray};
pub use dmi::{
    ObservationCollection, ObservationFeature, ObservationProperties, PointGeometry,
    TemperatureObservations, WindObservations,
};

/// DMI parameter identifiers.
pub mod parameters {
    pub const WIND_SPEED: &str = "wind_speed";
    pub const WIND_DIR: &str = "wind_dir";
    pub const WIND_GUST: &str = "wind_max";
    pub const TEMP_DRY: &str = "temp_dry";
    pub const HUMIDITY: &str = "humidity";
    pub const PRESSURE: &str = "pressure";
    pub const SEA_LEVEL: &str = "sea_reg";

    /// Marine forecast parameters, in request order.
    pub const FORECAST_WIND_U: &str = "wind-u";
    pub const FORECAST_WIND_V: &str = "wind-v";
    pub const FORECAST_SEA_LEVEL: &str = "sea-mean-deviation";
    pub const FORECAST_WATER_TEMP: &str = "water-temperature";

    pub const FORECAST_PARAMETERS: [&str; 4] = [
        FORECAST_WIND_U,
        FORECAST_WIND_V,
        FORECAST_SEA_LEVEL,
        FORECAST_WATER_TEMP,
    ];
}
