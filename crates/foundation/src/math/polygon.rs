//! Helpers over a single polygon ring in lng/lat degrees, backed by `geo`.
//!
//! Rings may be passed open or closed (first vertex repeated at the end);
//! `geo::Polygon::new` closes them. At parcel scale the planar approximation
//! is well within label-placement tolerances, so no projection is applied.

use geo::{Area, Centroid, Contains, InteriorPoint, LineString, Polygon};

use crate::LngLat;

fn open_ring(ring: &[LngLat]) -> &[LngLat] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

/// Build a hole-free `geo::Polygon` from a ring.
pub fn ring_polygon(ring: &[LngLat]) -> Polygon {
    let exterior: LineString = ring.iter().copied().map(geo::Coord::from).collect();
    Polygon::new(exterior, vec![])
}

/// Signed area in square degrees (positive for counter-clockwise rings).
pub fn ring_signed_area(ring: &[LngLat]) -> f64 {
    if open_ring(ring).len() < 3 {
        return 0.0;
    }
    ring_polygon(ring).signed_area()
}

/// Area-weighted centroid. Zero-area rings fall back to the centroid of
/// their outline.
pub fn ring_centroid(ring: &[LngLat]) -> Option<LngLat> {
    if ring.is_empty() {
        return None;
    }
    ring_polygon(ring).centroid().map(LngLat::from)
}

/// Strict containment: points on the outline are outside.
pub fn point_in_ring(point: LngLat, ring: &[LngLat]) -> bool {
    if open_ring(ring).len() < 3 {
        return false;
    }
    ring_polygon(ring).contains(&geo::Point::from(point))
}

/// A point inside the ring when one can be found, suitable for anchoring
/// labels and popups on concave parcels.
///
/// Uses the centroid when it is inside, otherwise `geo`'s interior point.
/// Falls back to the first vertex for rings with no interior.
pub fn representative_point(ring: &[LngLat]) -> Option<LngLat> {
    let first = *ring.first()?;
    let polygon = ring_polygon(ring);
    if let Some(centroid) = polygon.centroid()
        && polygon.contains(&centroid)
    {
        return Some(centroid.into());
    }
    Some(polygon.interior_point().map(LngLat::from).unwrap_or(first))
}
