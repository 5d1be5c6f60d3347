//! Interop with the planar primitives from the [`geo`] crate.
//!
//! Spatial consumers such as R-tree or tile indexes work with axis-aligned
//! `geo::Rect` values where `x` is longitude and `y` is latitude. A
//! [`Bounds`] spanning the antimeridian has no single planar equivalent,
//! so it decomposes into two pieces, one on each side of the seam.

use geo::{coord, Point, Rect};

use crate::bounds::{Bounds, InvalidBoundsError};
use crate::point::{GeoPoint, MAX_LONGITUDE, MIN_LONGITUDE};

impl From<GeoPoint> for Point {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude(), point.latitude())
    }
}

impl From<Point> for GeoPoint {
    fn from(point: Point) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}

impl Bounds {
    /// Splits the bounds into planar rectangles
    ///
    /// Returns a single rectangle for bounds that do not span the
    /// antimeridian, otherwise the west-side piece followed by the
    /// east-side piece.
    pub fn to_rects(&self) -> Vec<Rect> {
        if self.east() >= self.west() {
            vec![Rect::new(
                coord! { x: self.west(), y: self.south() },
                coord! { x: self.east(), y: self.north() },
            )]
        } else {
            vec![
                Rect::new(
                    coord! { x: self.west(), y: self.south() },
                    coord! { x: MAX_LONGITUDE, y: self.north() },
                ),
                Rect::new(
                    coord! { x: MIN_LONGITUDE, y: self.south() },
                    coord! { x: self.east(), y: self.north() },
                ),
            ]
        }
    }
}

impl TryFrom<Rect> for Bounds {
    type Error = InvalidBoundsError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Bounds::from_corners(rect.max().y, rect.max().x, rect.min().y, rect.min().x)
    }
}

#[cfg(test)]
mod tests {
    use geo::{coord, Point, Rect};

    use crate::bounds::Bounds;
    use crate::point::GeoPoint;

    #[test]
    fn plain_bounds_become_one_rect() {
        let bounds = Bounds::from_corners(10.0, 30.0, -10.0, 20.0).unwrap();
        let rects = bounds.to_rects();
        assert_eq!(
            rects,
            vec![Rect::new(
                coord! { x: 20.0, y: -10.0 },
                coord! { x: 30.0, y: 10.0 }
            )]
        );
    }

    #[test]
    fn seam_crossing_bounds_become_two_rects() {
        let bounds = Bounds::from_corners(10.0, -170.0, -10.0, 170.0).unwrap();
        let rects = bounds.to_rects();
        assert_eq!(
            rects,
            vec![
                Rect::new(coord! { x: 170.0, y: -10.0 }, coord! { x: 180.0, y: 10.0 }),
                Rect::new(
                    coord! { x: -180.0, y: -10.0 },
                    coord! { x: -170.0, y: 10.0 }
                ),
            ]
        );
    }

    #[test]
    fn rect_round_trip() {
        let bounds = Bounds::from_corners(10.0, 30.0, -10.0, 20.0).unwrap();
        let rects = bounds.to_rects();
        assert_eq!(Bounds::try_from(rects[0]), Ok(bounds));
    }

    #[test]
    fn point_conversions_swap_axes() {
        let point = GeoPoint::new(52.5, 13.4);
        let planar: Point = point.into();
        assert_eq!(planar, Point::new(13.4, 52.5));
        assert_eq!(GeoPoint::from(planar), point);
    }
}
