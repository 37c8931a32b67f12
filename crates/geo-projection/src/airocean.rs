//! Buckminster Fuller's Airocean (Dymaxion) projection.

use geo_common::{BoundingBox, GeoResult};

use crate::icosahedron::{cartesian_to_geo, geo_to_cartesian, ICOSAHEDRON};
use crate::net::{Net, NetLayout};
use crate::projection::GeographicProjection;

/// Surface area of the earth in square meters.
pub const EARTH_SURFACE_AREA: f64 = 510_100_000_000_000.0;

/// The classic strip net: ten faces around the equator in one band with
/// the northern and southern caps hung off alternate edges. Units are
/// radians of arc.
pub const AIROCEAN_LAYOUT: NetLayout = NetLayout {
    name: "airocean",
    root: 10,
    hinges: &[
        (11, 10),
        (3, 11),
        (4, 3),
        (0, 4),
        (5, 0),
        (6, 5),
        (16, 6),
        (17, 16),
        (18, 17),
        (9, 10),
        (2, 3),
        (1, 0),
        (7, 6),
        (8, 17),
        (12, 11),
        (13, 4),
        (14, 5),
        (15, 16),
        (19, 18),
    ],
    scale: 1.0,
    align_north: false,
};

/// Sphere to icosahedral net.
///
/// `from_geo` picks the face whose center is nearest the point, flattens the
/// point onto that face and places it in the net. `to_geo` finds the face
/// under the planar point and runs the same steps backwards. Points off the
/// net are extrapolated from the nearest face.
#[derive(Debug, Clone)]
pub struct Airocean {
    net: Net,
}

impl Airocean {
    pub fn new() -> Self {
        Self::with_layout(&AIROCEAN_LAYOUT).expect("built-in airocean layout is a valid net")
    }

    /// Build the projection over any valid net layout.
    pub fn with_layout(layout: &NetLayout) -> GeoResult<Self> {
        let mut net = Net::unfold(layout)?;
        if layout.align_north {
            let north = place_geo(&net, 0.0, 90.0);
            let south = place_geo(&net, 0.0, -90.0);
            net.align(north, south);
        }
        Ok(Self { net })
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    /// Index of the face `(lon, lat)` projects through.
    pub fn face_for(&self, lon: f64, lat: f64) -> usize {
        ICOSAHEDRON.face_for(&geo_to_cartesian(lon, lat))
    }

    /// Index of the face that owns the planar point `(x, y)`.
    pub fn locate(&self, x: f64, y: f64) -> usize {
        self.net.locate(x, y)
    }
}

impl Default for Airocean {
    fn default() -> Self {
        Self::new()
    }
}

fn place_geo(net: &Net, lon: f64, lat: f64) -> (f64, f64) {
    let ico = &*ICOSAHEDRON;
    let p = geo_to_cartesian(lon, lat);
    let face = ico.face_for(&p);
    let (x, y) = ico.triangle_transform(&ico.face(face).to_local(&p));
    net.place(face, x, y)
}

impl GeographicProjection for Airocean {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let ico = &*ICOSAHEDRON;
        let face = self.net.locate(x, y);
        let (lx, ly) = self.net.unplace(face, x, y);
        let local = ico.inverse_triangle_transform(lx, ly);
        cartesian_to_geo(&ico.face(face).to_sphere(&local))
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        place_geo(&self.net, lon, lat)
    }

    fn meters_per_unit(&self) -> f64 {
        (EARTH_SURFACE_AREA / self.net.area()).sqrt()
    }

    fn bounds(&self) -> BoundingBox {
        self.net.extent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosahedron::FACE_COUNT;

    fn arc_meters(a: (f64, f64), b: (f64, f64)) -> f64 {
        let pa = geo_to_cartesian(a.0, a.1);
        let pb = geo_to_cartesian(b.0, b.1);
        let r = EARTH_SURFACE_AREA.sqrt() / (4.0 * std::f64::consts::PI).sqrt();
        pa.cross(&pb).norm().atan2(pa.dot(&pb)) * r
    }

    #[test]
    fn test_roundtrip_across_globe() {
        let proj = Airocean::new();
        for lat in (-85..=85).step_by(17) {
            for lon in (-175..=175).step_by(25) {
                let (lon, lat) = (lon as f64 + 0.37, lat as f64 + 0.21);
                let (x, y) = proj.from_geo(lon, lat);
                let back = proj.to_geo(x, y);
                let err = arc_meters((lon, lat), back);
                assert!(err < 1.0, "({}, {}) came back {:?}, {} m off", lon, lat, back, err);
            }
        }
    }

    #[test]
    fn test_poles_are_finite() {
        let proj = Airocean::new();
        for lat in [90.0, -90.0] {
            let (x, y) = proj.from_geo(0.0, lat);
            assert!(x.is_finite() && y.is_finite());
            let (_, back) = proj.to_geo(x, y);
            assert!((back - lat).abs() < 1e-4);
        }
    }

    #[test]
    fn test_face_lookups_agree() {
        let proj = Airocean::new();
        let ico = &*ICOSAHEDRON;
        for face in 0..FACE_COUNT {
            let (lon, lat) = cartesian_to_geo(&ico.face(face).center);
            assert_eq!(proj.face_for(lon, lat), face);

            let (x, y) = proj.from_geo(lon, lat);
            assert_eq!(proj.locate(x, y), face);
        }
    }

    #[test]
    fn test_bounds_cover_projected_points() {
        let proj = Airocean::new();
        let bounds = proj.bounds();
        assert!(bounds.is_ordered());
        for (lon, lat) in [(0.0, 0.0), (179.9, 10.0), (-120.0, -60.0), (45.0, 89.0)] {
            let (x, y) = proj.from_geo(lon, lat);
            assert!(bounds.contains_point(x, y), "({}, {}) -> ({}, {})", lon, lat, x, y);
        }
    }

    #[test]
    fn test_bounds_are_the_whole_net() {
        let proj = Airocean::new();
        assert_eq!(proj.bounds(), proj.net().extent());

        // the default edge samples all land inside the net
        let (west, _) = proj.from_geo(-180.0, 0.0);
        let (_, south) = proj.from_geo(0.0, -90.0);
        let (east, _) = proj.from_geo(180.0, 0.0);
        let (_, north) = proj.from_geo(0.0, 90.0);
        let sampled = BoundingBox::from_corners(west, south, east, north);
        let bounds = proj.bounds();
        assert!(bounds.contains_point(sampled.min_x, sampled.min_y));
        assert!(bounds.contains_point(sampled.max_x, sampled.max_y));
        assert!(sampled.width() * sampled.height() < bounds.width() * bounds.height());
    }

    #[test]
    fn test_meters_per_unit_matches_earth_area() {
        let proj = Airocean::new();
        let mpu = proj.meters_per_unit();
        let area = proj.net().area() * mpu * mpu;
        assert!((area / EARTH_SURFACE_AREA - 1.0).abs() < 1e-12);
        // one radian of arc is a little over the earth's radius once spread flat
        assert!(mpu > 6_000_000.0 && mpu < 8_000_000.0, "{}", mpu);
    }

    #[test]
    fn test_not_upright_by_itself() {
        assert!(!Airocean::new().upright());
    }
}
