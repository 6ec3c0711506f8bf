//! Common types and utilities shared across the weather aggregator crates.

pub mod bbox;
pub mod coords;
pub mod error;
pub mod failure;
pub mod location;
pub mod source;
pub mod time;
pub mod units;

pub use bbox::BoundingBox;
pub use coords::Coordinates;
pub use error::{FetchError, FetchResult};
pub use failure::{
    classify_fetch_error, classify_message, no_data, Badge, BadgeColor, FailureCategory,
    FailureDescriptor,
};
pub use location::{Location, LocationsConfig};
pub use source::{Phenomenon, Provider};
