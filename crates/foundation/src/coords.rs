/// Geographic position in WGS84 degrees.
///
/// Longitude comes first, matching GeoJSON coordinate order and `geo`'s
/// `x`/`y` convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn from_array(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::from_array(pair)
    }
}

impl From<LngLat> for geo::Coord {
    fn from(p: LngLat) -> Self {
        geo::coord! { x: p.lng, y: p.lat }
    }
}

impl From<LngLat> for geo::Point {
    fn from(p: LngLat) -> Self {
        geo::Point::new(p.lng, p.lat)
    }
}

impl From<geo::Coord> for LngLat {
    fn from(c: geo::Coord) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<geo::Point> for LngLat {
    fn from(p: geo::Point) -> Self {
        Self::new(p.x(), p.y())
    }
}
