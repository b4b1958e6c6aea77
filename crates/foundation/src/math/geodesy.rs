use geo::HaversineDistance;

use crate::LngLat;

/// Mean Earth radius (meters), IUGG. Same value `geo` uses for its haversine
/// measures.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Great-circle distance between two positions, in meters.
pub fn haversine_distance_m(a: LngLat, b: LngLat) -> f64 {
    geo::Point::from(a).haversine_distance(&geo::Point::from(b))
}
