//! Unit conversions shared by the transformers.

pub mod speed {
    /// km/h to m/s.
    pub fn kph_to_ms(kph: f64) -> f64 {
        kph / 3.6
    }

    /// Beaufort-style buckets used for wind badges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum WindCategory {
        Light,
        Moderate,
        Fresh,
        Strong,
    }

    impl WindCategory {
        pub fn label(&self) -> &'static str {
            match self {
                WindCategory::Light => "Light",
                WindCategory::Moderate => "Moderate",
                WindCategory::Fresh => "Fresh",
                WindCategory::Strong => "Strong",
            }
        }
    }

    /// Categorize a wind speed in m/s.
    pub fn wind_category(speed_ms: f64) -> WindCategory {
        if speed_ms >= 15.0 {
            WindCategory::Strong
        } else if speed_ms >= 10.0 {
            WindCategory::Fresh
        } else if speed_ms >= 5.0 {
            WindCategory::Moderate
        } else {
            WindCategory::Light
        }
    }

    #[test]
    fn test_kph_to_ms() {
        assert_eq!(kph_to_ms(36.0), 10.0);
        assert_eq!(kph_to_ms(0.0), 0.0);
    }

    #[test]
    fn test_wind_category_boundaries() {
        assert_eq!(wind_category(4.99), WindCategory::Light);
        assert_eq!(wind_category(5.0), WindCategory::Moderate);
        assert_eq!(wind_category(10.0), WindCategory::Fresh);
        assert_eq!(wind_category(15.0), WindCategory::Strong);
    }
}

pub mod distance {
    /// Meters to kilometers.
    pub fn m_to_km(m: f64) -> f64 {
        m / 1000.0
    }

    #[test]
    fn test_m_to_km() {
        assert_eq!(m_to_km(1000.0), 1.0);
        assert_eq!(m_to_km(10000.0), 10.0);
    }
}

pub mod direction {
    const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

    /// Wrap any finite angle into `[0, 360)`.
    pub fn normalize_degrees(deg: f64) -> f64 {
        if !deg.is_finite() {
            return 0.0;
        }
        let wrapped = deg.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            // -0.0 folds to +0.0
            wrapped + 0.0
        }
    }

    /// 8-point compass name for a bearing.
    pub fn compass_point(deg: f64) -> &'static str {
        let idx = (normalize_degrees(deg) / 45.0).round() as usize % 8;
        COMPASS[idx]
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_normalize_negative_zero_is_positive() {
        let d = normalize_degrees(-0.0);
        assert_eq!(d, 0.0);
        assert!(d.is_sign_positive());
    }

    #[test]
    fn test_compass_point() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(225.0), "SW");
        assert_eq!(compass_point(359.0), "N");
    }
}
