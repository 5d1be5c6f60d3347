//! Latitude/longitude aligned bounding rectangles.
//!
//! The [`Bounds`] type keeps its east and west edges independent instead of
//! forcing `east >= west`. A rectangle whose east edge is numerically
//! smaller than its west edge spans the antimeridian and covers the
//! longitude range `[west, 180] ∪ [-180, east]`. All longitude reasoning
//! goes through the helpers in [`longitude`], which branch on this single
//! condition.

use std::fmt;
use std::hash::{Hash, Hasher};

use bincode::{Decode, Encode};
use thiserror::Error;

use crate::point::{
    GeoPoint, LONGITUDE_SPAN, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

pub mod longitude;

mod builder;

pub use builder::BoundsBuilder;
pub use builder::InsufficientPointsError;

/// Errors raised when corner values do not describe a valid rectangle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoundsError {
    #[error("latitude must not be NaN")]
    LatitudeNaN,

    #[error("longitude must not be NaN")]
    LongitudeNaN,

    #[error("longitude must not be infinite")]
    LongitudeInfinite,

    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("north latitude must not be less than south latitude")]
    NorthBelowSouth,
}

/// A geographical area representing a latitude/longitude aligned rectangle
///
/// The binary encoding writes the four corner values in north, east, south,
/// west order. Persisted region definitions rely on that layout, so the
/// field order below must not change.
///
/// # Examples
///
/// ```
/// use geobounds_core::Bounds;
///
/// let bounds = Bounds::from_corners(10.0, -170.0, -10.0, 170.0).unwrap();
/// assert_eq!(bounds.longitude_span(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, Encode, Decode)]
pub struct Bounds {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

fn check_corners(north: f64, east: f64, south: f64, west: f64) -> Result<(), InvalidBoundsError> {
    if north.is_nan() || south.is_nan() {
        return Err(InvalidBoundsError::LatitudeNaN);
    }
    if east.is_nan() || west.is_nan() {
        return Err(InvalidBoundsError::LongitudeNaN);
    }
    if east.is_infinite() || west.is_infinite() {
        return Err(InvalidBoundsError::LongitudeInfinite);
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&north)
        || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&south)
    {
        return Err(InvalidBoundsError::LatitudeOutOfRange);
    }
    if north < south {
        return Err(InvalidBoundsError::NorthBelowSouth);
    }
    Ok(())
}

impl Bounds {
    /// Only for callers that already hold validated, wrapped values
    pub(crate) fn new_unchecked(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Creates bounds from corner values given in north, east, south, west
    /// order
    ///
    /// Latitudes must be in `[-90, 90]` with `north >= south`. Longitudes
    /// must be finite and are wrapped into `[-180, 180]`; no ordering is
    /// enforced between them. Passing an east edge smaller than the west
    /// edge requests a rectangle spanning the antimeridian, e.g. corners
    /// (10, -170) and (-10, 170) describe a rectangle 20 degrees wide.
    pub fn from_corners(
        north: f64,
        east: f64,
        south: f64,
        west: f64,
    ) -> Result<Self, InvalidBoundsError> {
        check_corners(north, east, south, west)?;
        Ok(Self {
            north,
            east: longitude::wrap(east),
            south,
            west: longitude::wrap(west),
        })
    }

    /// The bounds covering the whole world
    pub fn world() -> Self {
        Self {
            north: MAX_LATITUDE,
            east: MAX_LONGITUDE,
            south: MIN_LATITUDE,
            west: MIN_LONGITUDE,
        }
    }

    /// The north latitude in degrees
    pub fn north(&self) -> f64 {
        self.north
    }

    /// The south latitude in degrees
    pub fn south(&self) -> f64 {
        self.south
    }

    /// The east longitude in degrees
    pub fn east(&self) -> f64 {
        self.east
    }

    /// The west longitude in degrees
    pub fn west(&self) -> f64 {
        self.west
    }

    /// The south west corner
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.west)
    }

    /// The north east corner
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.east)
    }

    /// The south east corner
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.east)
    }

    /// The north west corner
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.west)
    }

    /// The north east and south west corners
    pub fn corners(&self) -> [GeoPoint; 2] {
        [self.north_east(), self.south_west()]
    }

    /// Distance in degrees between the north and south edges
    pub fn latitude_span(&self) -> f64 {
        (self.north - self.south).abs()
    }

    /// Distance in degrees between the west and east edges, measured
    /// through the antimeridian when the rectangle spans it
    pub fn longitude_span(&self) -> f64 {
        longitude::span(self.east, self.west)
    }

    /// Whether the rectangle is degenerate along either axis
    pub fn is_empty_span(&self) -> bool {
        self.longitude_span() == 0.0 || self.latitude_span() == 0.0
    }

    /// The center of the rectangle by simple interpolation
    ///
    /// This is a planar calculation, not the geographic center.
    pub fn center(&self) -> GeoPoint {
        let latitude = (self.north + self.south) / 2.0;

        let longitude = if self.east >= self.west {
            (self.east + self.west) / 2.0
        } else {
            let half_span = (LONGITUDE_SPAN + self.east - self.west) / 2.0;
            let center = self.west + half_span;
            if center >= MAX_LONGITUDE {
                self.east - half_span
            } else {
                center
            }
        };

        GeoPoint::new(latitude, longitude)
    }

    fn contains_latitude(&self, latitude: f64) -> bool {
        latitude <= self.north && latitude >= self.south
    }

    /// Whether the given point lies within the rectangle, edges included
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.contains_latitude(point.latitude())
            && longitude::contains(self.east, self.west, point.longitude())
    }

    /// Whether the given bounds lie entirely within this rectangle
    ///
    /// Tested via the other rectangle's north east and south west corners.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(&other.north_east()) && self.contains(&other.south_west())
    }

    /// Returns new bounds stretched to cover both this rectangle and the
    /// given one
    pub fn union(&self, other: &Bounds) -> Bounds {
        self.union_unchecked(other.north, other.east, other.south, other.west)
    }

    /// Returns new bounds stretched to cover both this rectangle and the
    /// one given by corner values
    ///
    /// The corners are validated and wrapped like in
    /// [`from_corners`](Self::from_corners).
    pub fn union_corners(
        &self,
        north: f64,
        east: f64,
        south: f64,
        west: f64,
    ) -> Result<Bounds, InvalidBoundsError> {
        check_corners(north, east, south, west)?;
        Ok(self.union_unchecked(north, east, south, west))
    }

    fn union_unchecked(&self, north: f64, east: f64, south: f64, west: f64) -> Bounds {
        let north = self.north.max(north);
        let south = self.south.min(south);

        let east = longitude::wrap(east);
        let west = longitude::wrap(west);

        // longitudes match
        if self.east == east && self.west == west {
            return Bounds::new_unchecked(north, east, south, west);
        }

        let east_in_this = longitude::contains(self.east, self.west, east);
        let west_in_this = longitude::contains(self.east, self.west, west);
        let this_east_inside = longitude::contains(east, west, self.east);
        let this_west_inside = longitude::contains(east, west, self.west);

        // the two ranges overlap on both ends and cover the full circle
        if east_in_this && west_in_this && this_east_inside && this_west_inside {
            return Bounds::new_unchecked(north, MAX_LONGITUDE, south, MIN_LONGITUDE);
        }

        if east_in_this {
            if west_in_this {
                return Bounds::new_unchecked(north, self.east, south, self.west);
            }
            return Bounds::new_unchecked(north, self.east, south, west);
        }

        if this_east_inside {
            if this_west_inside {
                return Bounds::new_unchecked(north, east, south, west);
            }
            return Bounds::new_unchecked(north, east, south, self.west);
        }

        // disjoint ranges, connect them the short way round
        if longitude::span(east, self.west) < longitude::span(self.east, west) {
            return Bounds::new_unchecked(north, east, south, self.west);
        }

        Bounds::new_unchecked(north, self.east, south, west)
    }

    /// Returns the area covered by both this rectangle and the given one,
    /// or `None` when they do not overlap
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        self.intersect_unchecked(other.north, other.east, other.south, other.west)
    }

    /// Returns the area covered by both this rectangle and the one given by
    /// corner values, or `Ok(None)` when they do not overlap
    ///
    /// The corners are validated and wrapped like in
    /// [`from_corners`](Self::from_corners).
    pub fn intersect_corners(
        &self,
        north: f64,
        east: f64,
        south: f64,
        west: f64,
    ) -> Result<Option<Bounds>, InvalidBoundsError> {
        check_corners(north, east, south, west)?;
        Ok(self.intersect_unchecked(north, east, south, west))
    }

    fn intersect_unchecked(&self, north: f64, east: f64, south: f64, west: f64) -> Option<Bounds> {
        let south = self.south.max(south.min(MAX_LATITUDE));
        let north = self.north.min(north.max(MIN_LATITUDE));
        if north < south {
            return None;
        }

        let east = longitude::wrap(east);
        let west = longitude::wrap(west);

        // longitudes match
        if self.east == east && self.west == west {
            return Some(Bounds::new_unchecked(north, east, south, west));
        }

        let east_in_this = longitude::contains(self.east, self.west, east);
        let west_in_this = longitude::contains(self.east, self.west, west);
        let this_east_inside = longitude::contains(east, west, self.east);
        let this_west_inside = longitude::contains(east, west, self.west);

        // the ranges overlap on both ends, keep the wider of the two lenses
        if east_in_this && west_in_this && this_east_inside && this_west_inside {
            if longitude::span(east, self.west) > longitude::span(self.east, west) {
                return Some(Bounds::new_unchecked(north, east, south, self.west));
            }
            return Some(Bounds::new_unchecked(north, self.east, south, west));
        }

        if east_in_this {
            if west_in_this {
                return Some(Bounds::new_unchecked(north, east, south, west));
            }
            return Some(Bounds::new_unchecked(north, east, south, self.west));
        }

        if this_east_inside {
            if this_west_inside {
                return Some(Bounds::new_unchecked(north, self.east, south, self.west));
            }
            return Some(Bounds::new_unchecked(north, self.east, south, west));
        }

        None
    }

    /// Returns new bounds widened to also cover the given point
    ///
    /// The result is rebuilt from the two corners and the new point, so
    /// adding the identical point to degenerate bounds whose corners
    /// coincide fails with [`InsufficientPointsError`].
    pub fn include(&self, point: GeoPoint) -> Result<Bounds, InsufficientPointsError> {
        BoundsBuilder::new()
            .include(self.north_east())
            .include(self.south_west())
            .include(point)
            .build()
    }
}

impl PartialEq for Bounds {
    fn eq(&self, other: &Self) -> bool {
        self.north.to_bits() == other.north.to_bits()
            && self.east.to_bits() == other.east.to_bits()
            && self.south.to_bits() == other.south.to_bits()
            && self.west.to_bits() == other.west.to_bits()
    }
}

impl Eq for Bounds {}

impl Hash for Bounds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.north.to_bits());
        state.write_u64(self.east.to_bits());
        state.write_u64(self.south.to_bits());
        state.write_u64(self.west.to_bits());
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N:{}; E:{}; S:{}; W:{}",
            self.north, self.east, self.south, self.west
        )
    }
}
