//! Axis-flipping decorators and the factory that chooses between them.

use geo_common::{BoundingBox, Orientation};
use std::sync::Arc;

use crate::projection::{GeographicProjection, ProjectionRef};

/// Negates planar y so the north pole ends up below the south pole.
#[derive(Debug, Clone)]
pub struct UprightOrientation {
    base: ProjectionRef,
}

impl UprightOrientation {
    pub fn new(base: ProjectionRef) -> Self {
        Self { base }
    }
}

impl GeographicProjection for UprightOrientation {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        self.base.to_geo(x, -y)
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = self.base.from_geo(lon, lat);
        (x, -y)
    }

    fn meters_per_unit(&self) -> f64 {
        self.base.meters_per_unit()
    }

    fn bounds(&self) -> BoundingBox {
        self.base.bounds().mirrored_y()
    }
}

/// Swaps the planar axes.
#[derive(Debug, Clone)]
pub struct InvertedOrientation {
    base: ProjectionRef,
}

impl InvertedOrientation {
    pub fn new(base: ProjectionRef) -> Self {
        Self { base }
    }
}

impl GeographicProjection for InvertedOrientation {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        self.base.to_geo(y, x)
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = self.base.from_geo(lon, lat);
        (y, x)
    }

    fn meters_per_unit(&self) -> f64 {
        self.base.meters_per_unit()
    }

    fn bounds(&self) -> BoundingBox {
        self.base.bounds().transposed()
    }
}

/// Wrap `base` so it has the requested orientation.
///
/// | `base.upright()` | requested  | result                    |
/// |------------------|------------|---------------------------|
/// | true             | `Upright`  | `base`                    |
/// | true             | `Swapped`  | `Inverted(base)`          |
/// | any              | `None`     | `base`                    |
/// | false            | `Upright`  | `Upright(base)`           |
/// | false            | `Swapped`  | `Inverted(Upright(base))` |
///
/// Orienting an already upright projection as upright returns it unchanged,
/// so repeated calls never stack decorators.
pub fn orient_projection(base: ProjectionRef, orientation: Orientation) -> ProjectionRef {
    match orientation {
        Orientation::None => base,
        Orientation::Upright if base.upright() => base,
        Orientation::Upright => Arc::new(UprightOrientation::new(base)),
        Orientation::Swapped if base.upright() => Arc::new(InvertedOrientation::new(base)),
        Orientation::Swapped => Arc::new(InvertedOrientation::new(Arc::new(
            UprightOrientation::new(base),
        ))),
    }
}
