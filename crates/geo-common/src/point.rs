//! Coordinate pair types used at the edges of the library.
//!
//! The projection trait itself works on plain `(f64, f64)` tuples; these
//! named types are for drivers that print or serialize results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite and inside the canonical ranges
    /// (latitude in [-90, 90], longitude in [-180, 180]).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat={:.6}, lon={:.6}", self.lat, self.lon)
    }
}

/// A position in world (map) coordinates. `z` is the second planar axis,
/// which grows southward once a projection is oriented upright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub z: f64,
}

impl MapPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.3}, z={:.3}", self.x, self.z)
    }
}
