//! The per-location result bundle.

use serde::Serialize;
use transformers::{
    ForecastRecord, LightningRecord, OceanRecord, SeaLevelRecord, TemperatureRecord, WindRecord,
};
use wx_common::{Coordinates, FailureCategory, FailureDescriptor, Location, Provider};

/// What one (provider, phenomenon) slot resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome<R> {
    Ok {
        record: R,
    },
    /// Valid response with nothing usable in it. Not a failure.
    NoData {
        descriptor: FailureDescriptor,
    },
    Failed {
        category: FailureCategory,
        descriptor: FailureDescriptor,
    },
}

impl<R> Outcome<R> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            Outcome::Ok { record } => Some(record),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> Option<&FailureDescriptor> {
        match self {
            Outcome::Ok { .. } => None,
            Outcome::NoData { descriptor } | Outcome::Failed { descriptor, .. } => Some(descriptor),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Ok { .. } => "ok",
            Outcome::NoData { .. } => "no-data",
            Outcome::Failed { category, .. } => category.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry<R> {
    pub provider: Provider,
    pub source_name: String,
    pub outcome: Outcome<R>,
}

/// Set when every slot of a bundle failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleError {
    pub message: String,
    pub failed_sources: usize,
}

/// Everything known about one location after a single aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBundle {
    pub name: String,
    pub display_name: String,
    pub coords: Coordinates,
    pub wind: Vec<SourceEntry<WindRecord>>,
    pub temperature: Vec<SourceEntry<TemperatureRecord>>,
    pub ocean: Vec<SourceEntry<OceanRecord>>,
    pub sea_level: Vec<SourceEntry<SeaLevelRecord>>,
    pub forecast: Vec<SourceEntry<ForecastRecord>>,
    pub lightning: Vec<SourceEntry<LightningRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BundleError>,
}

impl LocationBundle {
    pub(crate) fn new(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            display_name: location.display_name(),
            coords: location.coords,
            wind: Vec::new(),
            temperature: Vec::new(),
            ocean: Vec::new(),
            sea_level: Vec::new(),
            forecast: Vec::new(),
            lightning: Vec::new(),
            error: None,
        }
    }

    /// Outcome labels of every slot, in phenomenon order.
    pub fn outcome_labels(&self) -> Vec<&'static str> {
        fn labels<R>(entries: &[SourceEntry<R>]) -> impl Iterator<Item = &'static str> + '_ {
            entries.iter().map(|e| e.outcome.label())
        }
        labels(&self.wind)
            .chain(labels(&self.temperature))
            .chain(labels(&self.ocean))
            .chain(labels(&self.sea_level))
            .chain(labels(&self.forecast))
            .chain(labels(&self.lightning))
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.outcome_labels().len()
    }

    pub fn failed_count(&self) -> usize {
        fn failed<R>(entries: &[SourceEntry<R>]) -> usize {
            entries.iter().filter(|e| e.outcome.is_failed()).count()
        }
        failed(&self.wind)
            + failed(&self.temperature)
            + failed(&self.ocean)
            + failed(&self.sea_level)
            + failed(&self.forecast)
            + failed(&self.lightning)
    }

    /// Fill `error` iff every slot failed.
    pub(crate) fn seal(mut self) -> Self {
        let total = self.entry_count();
        let failed = self.failed_count();
        self.error = (total > 0 && failed == total).then(|| BundleError {
            message: format!("All {} data sources failed for {}", total, self.display_name),
            failed_sources: failed,
        });
        self
    }
}
