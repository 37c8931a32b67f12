//! Common test fixtures for projection tests.
//!
//! Geographic positions are `(lon, lat)` in degrees, the order the
//! projection trait uses.

/// Well-known places spread across every continent and ocean.
pub mod places {
    pub const NULL_ISLAND: (f64, f64) = (0.0, 0.0);
    pub const NEW_YORK: (f64, f64) = (-74.006, 40.7128);
    pub const LONDON: (f64, f64) = (-0.1278, 51.5074);
    pub const TOKYO: (f64, f64) = (139.6917, 35.6895);
    pub const SYDNEY: (f64, f64) = (151.2093, -33.8688);
    pub const RIO_DE_JANEIRO: (f64, f64) = (-43.1729, -22.9068);
    pub const NAIROBI: (f64, f64) = (36.8219, -1.2921);
    pub const REYKJAVIK: (f64, f64) = (-21.9426, 64.1466);
    pub const MCMURDO: (f64, f64) = (166.6863, -77.8419);
    pub const HONOLULU: (f64, f64) = (-157.8583, 21.3069);
    /// Near the antimeridian.
    pub const SUVA: (f64, f64) = (178.4419, -18.1416);

    pub const ALL: [(f64, f64); 11] = [
        NULL_ISLAND,
        NEW_YORK,
        LONDON,
        TOKYO,
        SYDNEY,
        RIO_DE_JANEIRO,
        NAIROBI,
        REYKJAVIK,
        MCMURDO,
        HONOLULU,
        SUVA,
    ];
}

/// The documented smoke conversion of the world pipeline.
pub mod smoke {
    /// World `(x, z)` passed to `to_geo`.
    pub const WORLD_POINT: (f64, f64) = (3_231_992.0, -5_296_639.0);

    /// Uniform scale of the world pipeline.
    pub const WORLD_SCALE: f64 = 7_318_261.522857145;
}

/// Common planar extents for testing.
pub mod bbox {
    /// Global bounding box (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Single point (degenerate bbox)
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);

    /// Invalid bbox (min > max)
    pub const INVALID: (f64, f64, f64, f64) = (10.0, 10.0, 5.0, 5.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_are_in_range() {
        for (lon, lat) in places::ALL {
            assert!((-180.0..=180.0).contains(&lon));
            assert!((-90.0..=90.0).contains(&lat));
        }
    }

    #[test]
    fn test_bbox_fixtures() {
        let (min_x, min_y, max_x, max_y) = bbox::GLOBAL;
        assert!(min_x < max_x && min_y < max_y);
        let (min_x, _, max_x, _) = bbox::INVALID;
        assert!(min_x > max_x);
    }
}
