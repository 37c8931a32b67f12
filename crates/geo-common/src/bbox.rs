//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// A planar bounding box in projection units.
///
/// Projections that are not monotonic along an axis can report their raw
/// extremes in either order, so [`BoundingBox::from_corners`] sorts each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box from two arbitrary corners, swapping each axis
    /// pair so that min <= max.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let (min_x, max_x) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (min_y, max_y) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True when both axes satisfy min <= max.
    pub fn is_ordered(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Grow the box so it contains the given point.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// The box reflected across the x axis (y negated).
    pub fn mirrored_y(&self) -> Self {
        Self::new(self.min_x, -self.max_y, self.max_x, -self.min_y)
    }

    /// The box with its x and y roles exchanged.
    pub fn transposed(&self) -> Self {
        Self::new(self.min_y, self.min_x, self.max_y, self.max_x)
    }

    /// The box with each axis multiplied by a factor. Negative factors flip
    /// the axis, so the result is re-sorted.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Self::from_corners(
            self.min_x * sx,
            self.min_y * sy,
            self.max_x * sx,
            self.max_y * sy,
        )
    }
}

impl Default for BoundingBox {
    /// An empty box that any call to [`BoundingBox::include`] will replace.
    fn default() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_sorts_axes() {
        let bbox = BoundingBox::from_corners(180.0, 90.0, -180.0, -90.0);
        assert_eq!(bbox, BoundingBox::new(-180.0, -90.0, 180.0, 90.0));
        assert!(bbox.is_ordered());
    }

    #[test]
    fn test_include_from_empty() {
        let mut bbox = BoundingBox::default();
        assert!(!bbox.is_ordered());

        bbox.include(1.0, -2.0);
        bbox.include(-3.0, 4.0);
        assert_eq!(bbox, BoundingBox::new(-3.0, -2.0, 1.0, 4.0));
    }

    #[test]
    fn test_mirror_and_transpose() {
        let bbox = BoundingBox::new(-1.0, -2.0, 3.0, 5.0);
        assert_eq!(bbox.mirrored_y(), BoundingBox::new(-1.0, -5.0, 3.0, 2.0));
        assert_eq!(bbox.transposed(), BoundingBox::new(-2.0, -1.0, 5.0, 3.0));
    }
}
