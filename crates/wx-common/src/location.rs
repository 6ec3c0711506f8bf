//! Named query locations.
//!
//! Locations are a static configuration list: the aggregator never mutates
//! or persists them. The name doubles as a display key.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::coords::Coordinates;

/// A named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display key, conventionally CamelCase (e.g. "AmagerStrand").
    pub name: String,

    #[serde(flatten)]
    pub coords: Coordinates,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            coords: Coordinates::new(lat, lon),
        }
    }

    /// Human label derived by splitting the name on case boundaries.
    ///
    /// `"AmagerStrand"` becomes `"Amager Strand"`; acronyms stay together,
    /// so `"DMIStation"` becomes `"DMI Station"`.
    pub fn display_name(&self) -> String {
        let chars: Vec<char> = self.name.chars().collect();
        let mut out = String::with_capacity(self.name.len() + 4);

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            out.push(c);
        }

        out.trim().to_string()
    }
}

/// Location list loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationsConfig {
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            locations: vec![
                Location::new("AmagerStrand", 55.6553, 12.6489),
                Location::new("Hornbaek", 56.0936, 12.4575),
                Location::new("Klitmoller", 57.0400, 8.4900),
                Location::new("HvideSande", 56.0000, 8.1300),
            ],
        }
    }
}

impl LocationsConfig {
    /// Parse a YAML document of the form `locations: [{ name, lat, lon }]`.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load from a file, falling back to the built-in list when it is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, LocationsError> {
        if !path.exists() {
            warn!(
                path = %path.display(),
                "Locations file does not exist, using built-in locations"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| LocationsError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|e| LocationsError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            count = config.locations.len(),
            path = %path.display(),
            "Loaded locations"
        );
        Ok(config)
    }

    pub fn find(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocationsError {
    #[error("Failed to read locations file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse locations file {path}: {message}")]
    Parse { path: String, message: String },
}
