use std::fmt;
use std::hash::{Hash, Hasher};

/// Southernmost valid latitude in degrees
pub const MIN_LATITUDE: f64 = -90.0;

/// Northernmost valid latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Westernmost valid longitude in degrees
pub const MIN_LONGITUDE: f64 = -180.0;

/// Easternmost valid longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// Angular width of the full latitude range
pub const LATITUDE_SPAN: f64 = 180.0;

/// Angular width of the full longitude range
pub const LONGITUDE_SPAN: f64 = 360.0;

/// A geographic location given as a latitude/longitude pair in degrees
///
/// Points compare bit for bit, so they can be deduplicated and hashed
/// deterministically.
#[derive(Clone, Copy, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point. Latitude is expected in `[-90, 90]` and
    /// longitude in `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.latitude.to_bits());
        state.write_u64(self.longitude.to_bits());
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
