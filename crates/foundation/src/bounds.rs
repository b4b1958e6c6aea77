use geo::{BoundingRect, MultiPoint, Rect};

use crate::LngLat;

/// Axis-aligned bounding box in longitude/latitude degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LngLatBounds {
    pub min: LngLat,
    pub max: LngLat,
}

impl LngLatBounds {
    pub fn new(min: LngLat, max: LngLat) -> Self {
        LngLatBounds { min, max }
    }

    /// Returns `None` for an empty point set.
    pub fn from_points(points: &[LngLat]) -> Option<Self> {
        let points: MultiPoint = points.iter().copied().map(geo::Point::from).collect();
        points.bounding_rect().map(Self::from)
    }
}

impl From<Rect> for LngLatBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().into(), rect.max().into())
    }
}
