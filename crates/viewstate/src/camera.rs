use serde::{Deserialize, Serialize};

/// Camera shown on a first visit with no position in the URL (downtown Seattle).
pub const DEFAULT_CENTER: MapViewState = MapViewState {
    lat: 47.6062,
    lng: -122.3321,
    zoom: 12.0,
};

/// Latitude/longitude drift (degrees) below which a position counts as default.
pub const LAT_LNG_EPSILON: f64 = 0.0001;

/// Zoom drift below which a zoom level counts as default.
pub const ZOOM_EPSILON: f64 = 0.1;

/// Map camera. Range validation belongs to the caller.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewState {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        DEFAULT_CENTER
    }
}

impl MapViewState {
    pub const fn new(lat: f64, lng: f64, zoom: f64) -> Self {
        Self { lat, lng, zoom }
    }

    pub fn lat_is_default(&self) -> bool {
        (self.lat - DEFAULT_CENTER.lat).abs() <= LAT_LNG_EPSILON
    }

    pub fn lng_is_default(&self) -> bool {
        (self.lng - DEFAULT_CENTER.lng).abs() <= LAT_LNG_EPSILON
    }

    pub fn zoom_is_default(&self) -> bool {
        (self.zoom - DEFAULT_CENTER.zoom).abs() <= ZOOM_EPSILON
    }

    /// True when a shareable URL would carry no camera parameters.
    pub fn is_default(&self) -> bool {
        self.lat_is_default() && self.lng_is_default() && self.zoom_is_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CENTER, MapViewState};

    #[test]
    fn default_is_downtown_seattle() {
        let v = MapViewState::default();
        assert_eq!(v, DEFAULT_CENTER);
        assert!(v.is_default());
    }

    #[test]
    fn sub_threshold_drift_is_still_default() {
        let v = MapViewState::new(47.60625, -122.33205, 12.05);
        assert!(v.is_default());
    }

    #[test]
    fn each_component_is_checked_independently() {
        let lat = MapViewState::new(47.61, -122.3321, 12.0);
        assert!(!lat.lat_is_default());
        assert!(lat.lng_is_default());
        assert!(lat.zoom_is_default());

        let zoom = MapViewState::new(47.6062, -122.3321, 14.5);
        assert!(!zoom.zoom_is_default());
        assert!(!zoom.is_default());
    }

    #[test]
    fn serializes_as_flat_object() {
        let json = serde_json::to_value(DEFAULT_CENTER).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lat": 47.6062, "lng": -122.3321, "zoom": 12.0 })
        );
    }
}
