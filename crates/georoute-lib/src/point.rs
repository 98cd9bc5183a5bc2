//! Latitude/longitude value type and the flat-earth distance metric used for
//! every edge weight in the graph.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles used by [`GeoPoint::distance`].
pub const EARTH_RADIUS_MILES: f64 = 3963.2;

/// Immutable latitude/longitude coordinate in degrees.
///
/// Equality is exact value equality on both coordinates. Ordering compares
/// `lat` and then `lon`; it exists for deterministic tie-breaking and map
/// keys and says nothing about distance. Coordinates are expected to be
/// finite; loaders reject anything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Straight-line distance to `other` in miles.
    ///
    /// Uses an equirectangular approximation: the longitude delta is scaled by
    /// the cosine of the mean latitude, then both deltas are scaled by
    /// [`EARTH_RADIUS_MILES`]. Accurate for inter-city distances away from the
    /// poles and the antimeridian; this is not haversine.
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let delta_lon = (self.lon - other.lon).to_radians();
        let delta_lat = (self.lat - other.lat).to_radians();
        let mean_lat = ((self.lat + other.lat) / 2.0).to_radians();
        let delta_x = EARTH_RADIUS_MILES * mean_lat.cos() * delta_lon;
        let delta_y = EARTH_RADIUS_MILES * delta_lat;
        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }

    /// `true` when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.lat), canonical_bits(self.lon))
    }
}

// -0.0 and 0.0 compare equal, so they must hash and order equally too.
fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn canonical_bits(value: f64) -> u64 {
    canonical(value).to_bits()
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.lat)
            .total_cmp(&canonical(other.lat))
            .then_with(|| canonical(self.lon).total_cmp(&canonical(other.lon)))
    }
}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
