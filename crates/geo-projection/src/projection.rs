//! The projection capability shared by every concrete projection and decorator.

use std::f64::consts::PI;
use std::fmt::Debug;
use std::sync::Arc;

use geo_common::BoundingBox;

/// Equatorial circumference of the earth in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_017.0;

/// Meridional (pole to pole and back) circumference of the earth in meters.
pub const EARTH_POLAR_CIRCUMFERENCE: f64 = 40_008_000.0;

/// Shared handle to an immutable projection. Decorators own one of these
/// for the projection they wrap, and the registry hands them out.
pub type ProjectionRef = Arc<dyn GeographicProjection>;

/// Local distortion of a projection at one point.
///
/// `semi_major` and `semi_minor` are the axes of the Tissot ellipse
/// (`semi_major >= semi_minor`), expressed relative to a sphere of radius
/// `EARTH_CIRCUMFERENCE / 2π` in planar units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TissotIndicatrix {
    /// Areal scale factor h·k·sinθ′.
    pub areal_scale: f64,
    /// Maximum angular deformation in radians, 2·asin(b′/a′).
    pub max_angular_distortion: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
}

/// A mapping between geographic coordinates (degrees) and planar coordinates.
///
/// Only [`to_geo`](Self::to_geo) and [`from_geo`](Self::from_geo) are
/// required. The provided methods derive everything else from those two, so
/// decorators get correct defaults for free and only override what they can
/// compute more directly.
///
/// None of these methods fail. Input outside the canonical ranges, or
/// degenerate arguments such as a zero Tissot step, produce extrapolated,
/// NaN or infinite values that callers must check themselves.
pub trait GeographicProjection: Send + Sync + Debug {
    /// Planar `(x, y)` to geographic `(lon, lat)` in degrees.
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64);

    /// Geographic `(lon, lat)` in degrees to planar `(x, y)`.
    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Meters represented by one planar unit near the projection's reference point.
    fn meters_per_unit(&self) -> f64 {
        100_000.0
    }

    /// Planar box spanned by the projected extremes (±180° on the equator,
    /// ±90° on the prime meridian), each axis sorted so min <= max.
    fn bounds(&self) -> BoundingBox {
        let (west, _) = self.from_geo(-180.0, 0.0);
        let (_, south) = self.from_geo(0.0, -90.0);
        let (east, _) = self.from_geo(180.0, 0.0);
        let (_, north) = self.from_geo(0.0, 90.0);

        BoundingBox::from_corners(west, south, east, north)
    }

    /// True when the north pole maps to a y no greater than the south pole's.
    fn upright(&self) -> bool {
        self.from_geo(0.0, 90.0).1 <= self.from_geo(0.0, -90.0).1
    }

    /// Planar displacement approximating a local move of `north` and `east`
    /// meters from the planar point `(x, y)`.
    ///
    /// First-order only: the longitude offset is scaled by 1/cos(lat) and the
    /// latitude offset uses the polar circumference, so it is accurate for
    /// offsets that are small compared to the earth's radius.
    fn vector(&self, x: f64, y: f64, north: f64, east: f64) -> (f64, f64) {
        let (lon, lat) = self.to_geo(x, y);

        let (off_x, off_y) = self.from_geo(
            lon + east * 360.0 / (lat.to_radians().cos() * EARTH_CIRCUMFERENCE),
            lat + north * 360.0 / EARTH_POLAR_CIRCUMFERENCE,
        );

        (off_x - x, off_y - y)
    }

    /// Tissot indicatrix at `(lon, lat)` by forward differences with a step
    /// of `d` radians along each axis.
    fn tissot(&self, lon: f64, lat: f64, d: f64) -> TissotIndicatrix {
        let r = EARTH_CIRCUMFERENCE / (2.0 * PI);
        let ddeg = d.to_degrees();

        let base = self.from_geo(lon, lat);
        let lon_off = self.from_geo(lon + ddeg, lat);
        let lat_off = self.from_geo(lon, lat + ddeg);

        let dx_dlam = (lon_off.0 - base.0) / d;
        let dx_dphi = (lat_off.0 - base.0) / d;
        let dy_dlam = (lon_off.1 - base.1) / d;
        let dy_dphi = (lat_off.1 - base.1) / d;

        let cos_phi = lat.to_radians().cos();

        // meridian and parallel scale
        let h = dx_dphi.hypot(dy_dphi) / r;
        let k = dx_dlam.hypot(dy_dlam) / (cos_phi * r);

        let sin_theta = (dy_dphi * dx_dlam - dx_dphi * dy_dlam).abs() / (r * r * cos_phi * h * k);
        let ap = (h * h + k * k + 2.0 * h * k * sin_theta).sqrt();
        let bp = (h * h + k * k - 2.0 * h * k * sin_theta).max(0.0).sqrt();

        TissotIndicatrix {
            areal_scale: h * k * sin_theta,
            max_angular_distortion: 2.0 * (bp / ap).asin(),
            semi_major: (ap + bp) / 2.0,
            semi_minor: (ap - bp) / 2.0,
        }
    }
}

/// Identity projection: planar units are degrees of longitude and latitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl GeographicProjection for Equirectangular {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }
}
