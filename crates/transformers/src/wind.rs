//! Wind vector decomposition.

use wx_common::units::direction::normalize_degrees;

/// Wind expressed as speed and compass bearing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindVector {
    /// m/s
    pub speed: f64,
    /// Degrees in `[0, 360)`.
    pub direction: f64,
}

impl WindVector {
    /// Decompose eastward `u` and northward `v` components.
    ///
    /// Bearing is `atan2(u, v)`: `(0, 1)` is 0° (North), `(1, 0)` is 90° (East).
    pub fn from_components(u: f64, v: f64) -> Self {
        let speed = (u * u + v * v).sqrt();
        let mut direction = u.atan2(v).to_degrees();
        if direction < 0.0 {
            direction += 360.0;
        }
        Self {
            speed,
            direction: normalize_degrees(direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(WindVector::from_components(0.0, 1.0).direction, 0.0);
        assert!((WindVector::from_components(1.0, 0.0).direction - 90.0).abs() < 1e-9);
        assert!((WindVector::from_components(0.0, -1.0).direction - 180.0).abs() < 1e-9);
        assert!((WindVector::from_components(-1.0, 0.0).direction - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_zero_eastward_is_north() {
        let w = WindVector::from_components(-0.0, 1.0);
        assert_eq!(w.direction, 0.0);
        assert!(w.direction.is_sign_positive());
        assert_eq!(serde_json::json!(w.direction).to_string(), "0.0");
    }

    #[test]
    fn test_speed_is_magnitude() {
        let w = WindVector::from_components(3.0, 4.0);
        assert!((w.speed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_direction_always_in_range() {
        let steps = [-20.0, -7.5, -1.0, -1e-12, 0.0, 1e-12, 0.3, 4.0, 15.0];
        for &u in &steps {
            for &v in &steps {
                let d = WindVector::from_components(u, v).direction;
                assert!((0.0..360.0).contains(&d), "u={} v={} gave {}", u, v, d);
            }
        }
    }
}
