//! Common types shared by the projection library and its drivers.

pub mod bbox;
pub mod error;
pub mod orientation;
pub mod point;

pub use bbox::BoundingBox;
pub use error::{GeoError, GeoResult};
pub use orientation::Orientation;
pub use point::{GeoPoint, MapPoint};
