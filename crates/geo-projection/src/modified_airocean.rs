//! The land-preserving rearrangement of the Airocean net used for the
//! Build The Earth world map.

use geo_common::BoundingBox;

use crate::airocean::Airocean;
use crate::net::NetLayout;
use crate::projection::GeographicProjection;

/// 1 / edge arc, so every triangle in the net has unit sides.
const UNIT_EDGE_SCALE: f64 = 0.903_221_025_258_850_4;

/// Rooted on the face over central Asia. The cuts run through the North
/// Atlantic, the Pacific and the Southern Ocean so every continent except
/// Antarctica stays in one piece.
pub const MODIFIED_AIROCEAN_LAYOUT: NetLayout = NetLayout {
    name: "modified-airocean",
    root: 7,
    hinges: &[
        (1, 7),
        (8, 7),
        (9, 8),
        (2, 1),
        (0, 1),
        (6, 7),
        (16, 6),
        (10, 9),
        (11, 10),
        (3, 11),
        (17, 8),
        (18, 17),
        (4, 0),
        (5, 6),
        (15, 16),
        (14, 15),
        (13, 14),
        (12, 13),
        (19, 12),
    ],
    scale: UNIT_EDGE_SCALE,
    align_north: true,
};

/// Airocean over [`MODIFIED_AIROCEAN_LAYOUT`]. Face selection and the
/// in-face transform are shared with [`Airocean`]; only placement differs.
#[derive(Debug, Clone)]
pub struct ModifiedAirocean {
    inner: Airocean,
}

impl ModifiedAirocean {
    pub fn new() -> Self {
        Self {
            inner: Airocean::with_layout(&MODIFIED_AIROCEAN_LAYOUT)
                .expect("built-in modified airocean layout is a valid net"),
        }
    }

    pub fn face_for(&self, lon: f64, lat: f64) -> usize {
        self.inner.face_for(lon, lat)
    }

    pub fn locate(&self, x: f64, y: f64) -> usize {
        self.inner.locate(x, y)
    }
}

impl Default for ModifiedAirocean {
    fn default() -> Self {
        Self::new()
    }
}

impl GeographicProjection for ModifiedAirocean {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        self.inner.to_geo(x, y)
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.inner.from_geo(lon, lat)
    }

    fn meters_per_unit(&self) -> f64 {
        self.inner.meters_per_unit()
    }

    fn bounds(&self) -> BoundingBox {
        self.inner.bounds()
    }
}
