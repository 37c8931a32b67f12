//! Coordinate projections between the WGS84 sphere and planar world units.
//!
//! Every projection implements [`GeographicProjection`]. Concrete projections
//! ([`Equirectangular`], [`Airocean`], [`ModifiedAirocean`],
//! [`ConformalEstimate`]) do the math; decorators ([`UprightOrientation`],
//! [`InvertedOrientation`], [`ScaleProjection`]) only permute, flip or scale
//! the planar axes of the projection they wrap.
//!
//! ```
//! use geo_common::Orientation;
//! use geo_projection::{orient_projection, registry, GeographicProjection, ScaleProjection};
//!
//! let base = registry::lookup("bteairocean").unwrap();
//! let upright = orient_projection(base, Orientation::Upright);
//! let world = ScaleProjection::uniform(upright, 7_318_261.522857145);
//!
//! let (lon, lat) = world.to_geo(3_231_992.0, -5_296_639.0);
//! assert!((-180.0..=180.0).contains(&lon));
//! assert!((-90.0..=90.0).contains(&lat));
//! ```

pub mod airocean;
pub mod conformal;
pub mod icosahedron;
pub mod modified_airocean;
pub mod net;
pub mod orientation;
pub mod projection;
pub mod registry;
pub mod scale;
pub mod world;

pub use airocean::Airocean;
pub use conformal::ConformalEstimate;
pub use modified_airocean::ModifiedAirocean;
pub use net::{Net, NetLayout};
pub use orientation::{orient_projection, InvertedOrientation, UprightOrientation};
pub use projection::{
    Equirectangular, GeographicProjection, ProjectionRef, TissotIndicatrix, EARTH_CIRCUMFERENCE,
    EARTH_POLAR_CIRCUMFERENCE,
};
pub use scale::ScaleProjection;
pub use world::WorldProjection;
