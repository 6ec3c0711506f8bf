//! Shared test utilities for the weather aggregator workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Fixture path helpers and recorded provider payloads
//! - A scripted mock transport for the provider clients
//! - Float assertion macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixture, fixtures, MockReply, MockTransport};
//! ```

pub mod fixtures;
pub mod mock;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::{fixture, load_fixture};
pub use mock::{MockReply, MockTransport, RecordedCall};
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality for an `Option<f64>` that must be `Some`.
///
/// ```ignore
/// assert_some_approx_eq!(record.wind_gust, 12.5, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_some_approx_eq {
    ($option:expr, $expected:expr, $epsilon:expr) => {{
        match $option {
            Some(value) => $crate::assert_approx_eq!(value, $expected, $epsilon),
            None => panic!("expected Some(≈{:?}), got None", $expected),
        }
    }};
}
