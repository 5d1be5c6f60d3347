use thiserror::Error;

use crate::point::{GeoPoint, LONGITUDE_SPAN, MAX_LATITUDE, MIN_LATITUDE};

use super::{longitude, Bounds};

/// Error returned when too few distinct points are available to form bounds
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot build bounds from {0} distinct points, at least 2 are required")]
pub struct InsufficientPointsError(pub usize);

/// Accumulates points and folds them into a single [`Bounds`]
///
/// Points are deduplicated by value as they are added; the first occurrence
/// keeps its position. The builder is consumed by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use geobounds_core::{bounds::BoundsBuilder, GeoPoint};
///
/// let bounds = BoundsBuilder::new()
///     .include(GeoPoint::new(52.5, 13.4))
///     .include(GeoPoint::new(48.9, 2.4))
///     .build()
///     .unwrap();
/// assert_eq!(bounds.north(), 52.5);
/// assert_eq!(bounds.west(), 2.4);
/// ```
#[derive(Debug, Default)]
pub struct BoundsBuilder {
    points: Vec<GeoPoint>,
}

impl BoundsBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Adds a point unless an equal one was already added
    pub fn include(mut self, point: GeoPoint) -> Self {
        if !self.points.contains(&point) {
            self.points.push(point);
        }
        self
    }

    /// Adds all given points, deduplicating like [`include`](Self::include)
    pub fn includes<I>(self, points: I) -> Self
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        points.into_iter().fold(self, Self::include)
    }

    /// Folds the accumulated points into bounds
    pub fn build(self) -> Result<Bounds, InsufficientPointsError> {
        Bounds::from_points(&self.points)
    }
}

impl Bounds {
    /// Computes bounds covering all given points
    ///
    /// The longitude range is seeded from the first two distinct points,
    /// oriented along the shorter arc between them, and then grown greedily:
    /// a point outside the current range moves whichever edge yields the
    /// smaller resulting span, east winning ties. The result is therefore
    /// not guaranteed to be the minimal covering arc for every input order,
    /// but it is stable for a given order and existing consumers depend on
    /// its exact output.
    pub fn from_points(points: &[GeoPoint]) -> Result<Self, InsufficientPointsError> {
        let mut distinct: Vec<GeoPoint> = Vec::with_capacity(points.len());
        for point in points {
            if !distinct.contains(point) {
                distinct.push(*point);
            }
        }
        if distinct.len() < 2 {
            return Err(InsufficientPointsError(distinct.len()));
        }

        let mut min_lat = MAX_LATITUDE;
        let mut max_lat = MIN_LATITUDE;

        // seed the longitude range from the first two points, oriented so
        // that it covers the shorter arc between them
        let mut east = distinct[0].longitude();
        let mut west = distinct[1].longitude();
        if (east - west).abs() < LONGITUDE_SPAN / 2.0 {
            if east < west {
                std::mem::swap(&mut east, &mut west);
            }
        } else if west < east {
            std::mem::swap(&mut east, &mut west);
        }

        for point in &distinct {
            min_lat = min_lat.min(point.latitude());
            max_lat = max_lat.max(point.latitude());

            let lon = point.longitude();
            if !longitude::contains(east, west, lon) {
                let east_span = longitude::span(lon, west);
                let west_span = longitude::span(east, lon);
                if east_span <= west_span {
                    east = lon;
                } else {
                    west = lon;
                }
            }
        }

        Ok(Self::new_unchecked(max_lat, east, min_lat, west))
    }
}
