//! CoverageJSON as returned by the DMI forecast EDR position query.
//!
//! Only the members needed to extract point time series are bound; the
//! `parameters` block is kept as raw JSON.
//!
//! See: <https://covjson.org/>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A CoverageJSON document for a point series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoverageJson {
    /// Document type ("Coverage").
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub domain: Option<Domain>,

    #[serde(default)]
    pub parameters: Option<serde_json::Value>,

    /// Data ranges keyed by parameter name.
    #[serde(default)]
    pub ranges: HashMap<String, NdArray>,
}

impl CoverageJson {
    /// Values of the `t` axis, in order.
    pub fn time_values(&self) -> Vec<String> {
        self.domain
            .as_ref()
            .and_then(|d| d.axes.get("t"))
            .map(|axis| {
                axis.values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Range values for a parameter; empty if the parameter is absent.
    pub fn series(&self, name: &str) -> &[Option<f64>] {
        self.ranges
            .get(name)
            .map(|r| r.values.as_slice())
            .unwrap_or(&[])
    }

    /// Value at index `i` of a parameter's range.
    pub fn value_at(&self, name: &str, i: usize) -> Option<f64> {
        self.series(name).get(i).copied().flatten()
    }

    /// True if any range holds at least one non-null value.
    ///
    /// Out-of-grid points come back as 200 with all-null ranges rather than
    /// a 404, so this is the only way to tell "no coverage" from data.
    pub fn has_valid_data(&self) -> bool {
        self.ranges
            .values()
            .any(|r| r.values.iter().any(Option::is_some))
    }
}

/// The domain of a coverage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(rename = "domainType", default)]
    pub domain_type: Option<String>,

    #[serde(default)]
    pub axes: HashMap<String, Axis>,
}

/// A domain axis. Spatial axes hold numbers, `t` holds ISO strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
}

/// N-dimensional array containing data values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NdArray {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(rename = "dataType", default)]
    pub data_type: Option<String>,

    #[serde(rename = "axisNames", default)]
    pub axis_names: Option<Vec<String>>,

    #[serde(default)]
    pub shape: Option<Vec<usize>>,

    /// The data values (null for missing data).
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}
