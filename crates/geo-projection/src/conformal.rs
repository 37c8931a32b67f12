//! A whole-globe conformal map.
//!
//! Lagrange's construction: take the Mercator coordinates ζ = ψ + iλ (ψ the
//! isometric latitude), compress them by a factor `W`, and fold them into
//! the unit disc with w = tanh(Wζ/2). Any holomorphic map is conformal, so
//! angles are preserved everywhere except at the two poles, which land on
//! finite points. With `W = ½` the whole sphere fits in a disc of radius `K`.

use std::f64::consts::PI;

use geo_common::{GeoError, GeoResult};
use nalgebra::{Complex, ComplexField};

use crate::projection::{GeographicProjection, EARTH_CIRCUMFERENCE};

/// Default compression: the ±180° meridians meet the disc edge.
pub const DEFAULT_W: f64 = 0.5;

/// Default radius: one planar unit is one degree at the origin.
pub const DEFAULT_K: f64 = 720.0 / PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConformalEstimate {
    w: f64,
    k: f64,
}

impl ConformalEstimate {
    pub fn new() -> Self {
        Self {
            w: DEFAULT_W,
            k: DEFAULT_K,
        }
    }

    /// `w` must be in (0, ½] so the antimeridian stays on or inside the
    /// disc, and `k` must be a positive finite radius.
    pub fn with_params(w: f64, k: f64) -> GeoResult<Self> {
        if !(w > 0.0 && w <= 0.5) {
            return Err(GeoError::invalid_parameter(
                "w",
                format!("must be in (0, 0.5], got {}", w),
            ));
        }
        if !(k.is_finite() && k > 0.0) {
            return Err(GeoError::invalid_parameter(
                "k",
                format!("must be positive, got {}", k),
            ));
        }
        Ok(Self { w, k })
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl Default for ConformalEstimate {
    fn default() -> Self {
        Self::new()
    }
}

impl GeographicProjection for ConformalEstimate {
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let w = Complex::new(y / self.k, x / self.k);

        // tanh reaches ±1 only at infinite ψ
        if w.im == 0.0 && w.re.abs() == 1.0 {
            return (0.0, 90.0 * w.re);
        }

        let zeta = w.atanh() * 2.0;
        let psi = zeta.re / self.w;
        let lam = zeta.im / self.w;

        (lam.to_degrees(), psi.sinh().atan().to_degrees())
    }

    fn from_geo(&self, lon: f64, lat: f64) -> (f64, f64) {
        let sin_phi = lat.to_radians().sin();
        let t = if sin_phi.abs() >= 1.0 {
            sin_phi.signum()
        } else {
            (self.w * sin_phi.atanh() / 2.0).tanh()
        };
        let s = (self.w * lon.to_radians() / 2.0).tan();

        // tanh(a + ib) = (tanh a + i tan b) / (1 + i tanh a tan b)
        let w = Complex::new(t, s) / Complex::new(1.0, t * s);
        (self.k * w.im, self.k * w.re)
    }

    fn meters_per_unit(&self) -> f64 {
        EARTH_CIRCUMFERENCE / (PI * self.k * self.w)
    }
}
