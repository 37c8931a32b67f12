//! Planar unit conversion.

use geo_common::BoundingBox;

use crate::projection::{GeographicProjection, ProjectionRef};

/// Multiplies the planar output of `base` by `(scale_x, scale_y)`.
///
/// Zero or non-finite factors are accepted and produce NaN or infinite
/// coordinates like any other degenerate input.
#[derive(Debug, Clone)]
pub struct ScaleProjection {
    base: ProjectionRef,
    scale_x: f64,
    scale_y: f64,
}

impl ScaleProjection {
    pub fn new(base: ProjectionRef, scale_x: f64, scale_y: f64) -> Self {
        Self {
            base,
            scale_x,
            scale_y,
        }
    }

    pub fn uniform(base: ProjectionRef, scale: f64) -> Self {
        Self::new(base, scale, scale)
    }
}

impl GeographicProjection for ScaleProjection {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        self.base.to_geo(x / self.scale_x, y / self.scale_y)
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = self.base.from_geo(lon, lat);
        (x * self.scale_x, y * self.scale_y)
    }

    fn meters_per_unit(&self) -> f64 {
        let mean = ((self.scale_x * self.scale_x + self.scale_y * self.scale_y) / 2.0).sqrt();
        self.base.meters_per_unit() / mean
    }

    fn bounds(&self) -> BoundingBox {
        self.base.bounds().scaled(self.scale_x, self.scale_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Equirectangular;
    use std::sync::Arc;

    #[test]
    fn test_scales_both_ways() {
        let proj = ScaleProjection::new(Arc::new(Equirectangular), 2.0, 3.0);
        assert_eq!(proj.from_geo(10.0, 20.0), (20.0, 60.0));
        assert_eq!(proj.to_geo(20.0, 60.0), (10.0, 20.0));
        assert_eq!(proj.bounds(), BoundingBox::new(-360.0, -270.0, 360.0, 270.0));
    }

    #[test]
    fn test_meters_per_unit() {
        let proj = ScaleProjection::uniform(Arc::new(Equirectangular), 1000.0);
        assert!((proj.meters_per_unit() - 100.0).abs() < 1e-12);

        let proj = ScaleProjection::new(Arc::new(Equirectangular), 3.0, 4.0);
        let mean = 12.5f64.sqrt();
        assert!((proj.meters_per_unit() - 100_000.0 / mean).abs() < 1e-9);
    }

    #[test]
    fn test_negative_scale_flips_orientation() {
        let proj = ScaleProjection::new(Arc::new(Equirectangular), 1.0, -1.0);
        assert!(proj.upright());
        let bounds = proj.bounds();
        assert!(bounds.is_ordered());
        assert_eq!(bounds, BoundingBox::new(-180.0, -90.0, 180.0, 90.0));
    }

    #[test]
    fn test_zero_scale_is_not_finite() {
        let proj = ScaleProjection::uniform(Arc::new(Equirectangular), 0.0);
        let (lon, lat) = proj.to_geo(1.0, 1.0);
        assert!(lon.is_infinite() && lat.is_infinite());
    }
}
