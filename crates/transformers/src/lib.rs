//! Normalization of raw provider payloads into canonical records.
//!
//! Every (provider, phenomenon) pair has one [`Transformer`]. Transformers
//! are pure and total over the raw shapes in `provider-schemas`: absent
//! optional fields degrade to defaults, and a payload with nothing usable
//! yields `None`, which callers report as no-data.

pub mod dmi;
pub mod openweather;
pub mod records;
pub mod series;
pub mod weatherapi;
pub mod wind;

use chrono::{DateTime, Utc};
use wx_common::{Coordinates, Phenomenon, Provider};

pub use records::{
    ForecastRecord, LightningRecord, MarineForecastPoint, OceanRecord, RiskLevel, SeaLevelRecord,
    TemperatureRecord, WindRecord,
};
pub use wind::WindVector;

/// Inputs a transformer may consult besides the payload itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    /// The query point the request was made for.
    pub coords: Coordinates,
    /// Reference instant for timestamp fallbacks and relative windows.
    pub now: DateTime<Utc>,
}

impl TransformContext {
    pub fn new(coords: Coordinates, now: DateTime<Utc>) -> Self {
        Self { coords, now }
    }

    pub fn fallback_location(&self) -> String {
        self.coords.fallback_label()
    }

    pub fn now_iso(&self) -> String {
        wx_common::time::to_iso(self.now)
    }
}

/// Maps one provider's raw payload into the canonical record for one
/// phenomenon.
pub trait Transformer {
    type Raw;
    type Record;

    const PROVIDER: Provider;
    const PHENOMENON: Phenomenon;

    /// `None` means the response was valid but held nothing usable.
    fn transform(&self, raw: &Self::Raw, ctx: &TransformContext) -> Option<Self::Record>;
}
