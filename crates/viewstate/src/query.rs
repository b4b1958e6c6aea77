use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    DEFAULT_CENTER, FilterState, MapViewState, ShareableUrlParams, build_shareable_url,
    default_layers, parse_filters, parse_layers,
};

/// Complete view state decoded from a `/map` query string, defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlViewParams {
    pub view_state: MapViewState,
    pub layers: Vec<String>,
    pub filters: FilterState,
    pub inspected_feature_id: Option<String>,
    pub compare: bool,
}

impl Default for UrlViewParams {
    fn default() -> Self {
        Self {
            view_state: MapViewState::default(),
            layers: default_layers(),
            filters: FilterState::new(),
            inspected_feature_id: None,
            compare: false,
        }
    }
}

impl UrlViewParams {
    pub fn as_shareable(&self) -> ShareableUrlParams<'_> {
        ShareableUrlParams {
            view_state: self.view_state,
            layers: &self.layers,
            filters: &self.filters,
            inspected_feature_id: self.inspected_feature_id.as_deref(),
            compare: self.compare,
        }
    }

    pub fn shareable_url(&self) -> String {
        build_shareable_url(&self.as_shareable())
    }
}

/// Decode a raw query string (leading `?` optional).
///
/// Unknown keys are ignored and the last occurrence of a repeated key wins.
/// A `layers` key that is present but empty means "no layers", while an
/// absent key means the default set.
pub fn parse_query(query: &str) -> UrlViewParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = UrlViewParams::default();
    let mut raw_layers: Option<String> = None;

    // Lenient decoding: malformed `%` escapes are kept literally and invalid
    // UTF-8 is replaced rather than rejected.
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match &*key {
            "lat" => params.view_state.lat = parse_number(&value, DEFAULT_CENTER.lat),
            "lng" => params.view_state.lng = parse_number(&value, DEFAULT_CENTER.lng),
            "z" => params.view_state.zoom = parse_number(&value, DEFAULT_CENTER.zoom),
            "layers" => raw_layers = Some(value.into_owned()),
            "filters" => params.filters = parse_filters(&value),
            "inspect" => {
                params.inspected_feature_id = Some(value.into_owned()).filter(|v| !v.is_empty())
            }
            "compare" => params.compare = value == "true",
            other => trace!(key = other, "ignoring unknown view parameter"),
        }
    }

    params.layers = parse_layers(raw_layers.as_deref());
    params
}

fn parse_number(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::{UrlViewParams, parse_query};
    use crate::{MapViewState, default_layers, parse_filters};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_is_default() {
        assert_eq!(parse_query(""), UrlViewParams::default());
        assert_eq!(parse_query("?"), UrlViewParams::default());
    }

    #[test]
    fn absent_and_empty_layers_differ() {
        assert_eq!(parse_query("lat=47.6").layers, default_layers());
        assert!(parse_query("layers=").layers.is_empty());
        assert!(parse_query("layers").layers.is_empty());
    }

    #[test]
    fn decodes_every_parameter() {
        let p = parse_query(
            "?lat=47.6543&lng=-122.3079&z=15.5&layers=zoning%2Ctransit\
             &filters=zoning.category%3Aresidential&inspect=parcel+42&compare=true&utm_source=x",
        );
        assert_eq!(p.view_state, MapViewState::new(47.6543, -122.3079, 15.5));
        assert_eq!(p.layers, vec!["zoning".to_string(), "transit".to_string()]);
        assert_eq!(p.filters, parse_filters("zoning.category:residential"));
        assert_eq!(p.inspected_feature_id.as_deref(), Some("parcel 42"));
        assert!(p.compare);
    }

    #[test]
    fn malformed_escapes_pass_through() {
        let inspect = |q| parse_query(q).inspected_feature_id;
        assert_eq!(inspect("inspect=100%").as_deref(), Some("100%"));
        assert_eq!(inspect("inspect=%zz%4").as_deref(), Some("%zz%4"));
        assert_eq!(inspect("inspect=%+1").as_deref(), Some("% 1"));
        assert_eq!(inspect("inspect=%FF").as_deref(), Some("\u{FFFD}"));
        assert_eq!(inspect("inspect=%c3%a9").as_deref(), Some("é"));
    }

    #[test]
    fn bad_numbers_fall_back_per_component() {
        let p = parse_query("lat=north&lng=-122.2&z=NaN");
        assert_eq!(p.view_state, MapViewState::new(47.6062, -122.2, 12.0));
    }

    #[test]
    fn compare_requires_literal_true() {
        assert!(!parse_query("compare=1").compare);
        assert!(!parse_query("compare=TRUE").compare);
        assert!(parse_query("compare=false&compare=true").compare);
    }

    #[test]
    fn shareable_url_round_trips() {
        let original = UrlViewParams {
            view_state: MapViewState::new(47.6205, -122.3493, 14.0),
            layers: vec!["zoning".to_string(), "light_rail".to_string()],
            filters: parse_filters("zoning.category:mixed,downtown;transit.mode:bus"),
            inspected_feature_id: Some("1234 5th Ave".to_string()),
            compare: true,
        };
        let url = original.shareable_url();
        let query = url.strip_prefix("/map").unwrap();
        assert_eq!(parse_query(query), original);
    }

    #[test]
    fn cleared_layers_survive_sharing() {
        let original = UrlViewParams {
            layers: Vec::new(),
            ..UrlViewParams::default()
        };
        let url = original.shareable_url();
        assert_eq!(url, "/map?layers=");
        assert_eq!(parse_query(url.strip_prefix("/map").unwrap()), original);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(UrlViewParams::default()).unwrap();
        assert_eq!(json["viewState"]["zoom"], 12.0);
        assert_eq!(json["layers"], serde_json::json!(["zoning"]));
        assert_eq!(json["inspectedFeatureId"], serde_json::Value::Null);
        assert_eq!(json["compare"], false);
    }
}
