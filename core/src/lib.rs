//! Core primitives for working with geographic bounding rectangles.
//!
//! The central type is [`Bounds`], a latitude/longitude aligned rectangle
//! that stays well formed when it spans the antimeridian. Bounds can be
//! constructed from corner values, from a Web Mercator tile index, or
//! incrementally from points via [`bounds::BoundsBuilder`], and combined
//! with union and intersection.

pub mod bounds;
pub mod point;
pub mod rect;
pub mod tile;

pub use bounds::Bounds;
pub use point::GeoPoint;
