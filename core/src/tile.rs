//! Conversion from Web Mercator tile indices to geographic bounds.

use std::f64::consts::PI;

use crate::bounds::Bounds;

/// Northernmost latitude representable in the Web Mercator projection
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112877980659;

/// Southernmost latitude representable in the Web Mercator projection
pub const MIN_MERCATOR_LATITUDE: f64 = -85.05112877980659;

fn tile_latitude(zoom: u32, row: f64) -> f64 {
    let n = 2.0_f64.powi(zoom as i32);
    (PI * (1.0 - 2.0 * row / n)).sinh().atan().to_degrees()
}

fn tile_longitude(zoom: u32, column: f64) -> f64 {
    let n = 2.0_f64.powi(zoom as i32);
    column / n * 360.0 - 180.0
}

impl Bounds {
    /// Returns the geographic bounds of a Web Mercator tile
    ///
    /// The tile index is trusted; `x` and `y` are expected to be below
    /// `2^zoom`. Latitudes of the result stay within
    /// [`MIN_MERCATOR_LATITUDE`] and [`MAX_MERCATOR_LATITUDE`] at any
    /// finite zoom.
    pub fn from_tile(zoom: u32, x: u32, y: u32) -> Self {
        Self::new_unchecked(
            tile_latitude(zoom, y as f64),
            tile_longitude(zoom, x as f64 + 1.0),
            tile_latitude(zoom, y as f64 + 1.0),
            tile_longitude(zoom, x as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, BooleanAssertion};
    use pretty_assertions::assert_eq;

    use super::{Bounds, MAX_MERCATOR_LATITUDE, MIN_MERCATOR_LATITUDE};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn root_tile_covers_the_mercator_world() {
        let bounds = Bounds::from_tile(0, 0, 0);
        assert_eq!(bounds.west(), -180.0);
        assert_eq!(bounds.east(), 180.0);
        assert_close(bounds.north(), MAX_MERCATOR_LATITUDE);
        assert_close(bounds.south(), MIN_MERCATOR_LATITUDE);
    }

    #[test]
    fn zoom_one_quadrants() {
        let north_west = Bounds::from_tile(1, 0, 0);
        assert_eq!(north_west.west(), -180.0);
        assert_eq!(north_west.east(), 0.0);
        assert_eq!(north_west.south(), 0.0);
        assert_close(north_west.north(), MAX_MERCATOR_LATITUDE);

        let south_east = Bounds::from_tile(1, 1, 1);
        assert_eq!(south_east.west(), 0.0);
        assert_eq!(south_east.east(), 180.0);
        assert_eq!(south_east.north(), 0.0);
        assert_close(south_east.south(), MIN_MERCATOR_LATITUDE);
    }

    #[test]
    fn zoom_two_tile_edges() {
        let bounds = Bounds::from_tile(2, 1, 1);
        assert_eq!(bounds.west(), -90.0);
        assert_eq!(bounds.east(), 0.0);
        assert_eq!(bounds.south(), 0.0);
        assert_close(bounds.north(), 66.51326044311186);
    }

    #[test]
    fn adjacent_tiles_share_edges() {
        let left = Bounds::from_tile(3, 2, 3);
        let right = Bounds::from_tile(3, 3, 3);
        assert_eq!(left.east(), right.west());
        let below = Bounds::from_tile(3, 2, 4);
        assert_eq!(left.south(), below.north());
    }

    #[test]
    fn tile_bounds_contain_their_center() {
        let bounds = Bounds::from_tile(10, 550, 335);
        assert_that!(bounds.contains(&bounds.center())).is_true();
    }
}
