//! Shared test utilities for the geo-projection workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate-equality assertion macros for scalars, planar pairs and
//!   geographic positions
//! - Deterministic samplers covering the globe
//! - Named fixture points and extents
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
//! use test_utils::{assert_geo_approx_eq, globe_grid, places};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

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
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Asserts two `(lon, lat)` positions in degrees are within `meters` of each
/// other along the earth's surface. Longitudes that differ by a full turn
/// compare equal.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_geo_approx_eq;
///
/// assert_geo_approx_eq!((180.0, 10.0), (-180.0, 10.0), 1.0); // passes
/// ```
#[macro_export]
macro_rules! assert_geo_approx_eq {
    ($left:expr, $right:expr, $meters:expr) => {{
        let left: (f64, f64) = $left;
        let right: (f64, f64) = $right;
        let meters: f64 = $meters as f64;
        let distance = $crate::haversine_meters(left, right);
        if !(distance <= meters) {
            panic!(
                "assertion failed: `(left ≈ right)` on the sphere\n  left: `{:?}`,\n right: `{:?}`,\n  distance: `{:.3} m` > `{:?} m`",
                left, right, distance, meters
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 0.001);
    }

    #[test]
    fn test_assert_coords_approx_eq_passes() {
        assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
    }

    #[test]
    fn test_assert_geo_approx_eq_wraps_antimeridian() {
        assert_geo_approx_eq!((180.0, 10.0), (-180.0, 10.0), 1e-3);
        assert_geo_approx_eq!((37.0, 90.0), (-112.0, 90.0), 1e-3);
    }

    #[test]
    #[should_panic(expected = "on the sphere")]
    fn test_assert_geo_approx_eq_fails() {
        // a thousandth of a degree of latitude is about 111 m
        assert_geo_approx_eq!((0.0, 0.0), (0.0, 0.001), 100.0);
    }
}
