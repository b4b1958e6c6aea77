use crate::{DEFAULT_LAYERS, FilterState, MapViewState, serialize_filters, serialize_layers};

/// Path every shareable link points at.
pub const MAP_PATH: &str = "/map";

/// Borrowed snapshot of everything a shareable link encodes.
#[derive(Debug, Clone, Copy)]
pub struct ShareableUrlParams<'a> {
    pub view_state: MapViewState,
    pub layers: &'a [String],
    pub filters: &'a FilterState,
    pub inspected_feature_id: Option<&'a str>,
    pub compare: bool,
}

/// Build the canonical `/map` link for a view, omitting default values.
///
/// Parameters appear in a fixed order: `lat`, `lng`, `z`, `layers`,
/// `filters`, `inspect`, `compare`. Camera components are only written once
/// they drift past [`crate::LAT_LNG_EPSILON`] / [`crate::ZOOM_EPSILON`], so
/// sub-pixel panning does not churn the URL.
pub fn build_shareable_url(params: &ShareableUrlParams<'_>) -> String {
    let mut query: Vec<(&str, String)> = Vec::new();
    let view = params.view_state;

    if !view.is_default() {
        if !view.lat_is_default() {
            query.push(("lat", format!("{:.4}", view.lat)));
        }
        if !view.lng_is_default() {
            query.push(("lng", format!("{:.4}", view.lng)));
        }
        if !view.zoom_is_default() {
            query.push(("z", format!("{:.1}", view.zoom)));
        }
    }

    // Compared as serialized strings: an explicitly chosen default set and an
    // untouched one produce the same link. An explicitly cleared set
    // serializes to "" and is kept as `layers=`.
    let layers = serialize_layers(params.layers);
    if layers != serialize_layers(DEFAULT_LAYERS) {
        query.push(("layers", layers));
    }

    let filters = serialize_filters(params.filters);
    if !filters.is_empty() {
        query.push(("filters", filters));
    }

    if let Some(id) = params.inspected_feature_id.filter(|id| !id.is_empty()) {
        query.push(("inspect", id.to_owned()));
    }

    if params.compare {
        query.push(("compare", "true".to_owned()));
    }

    if query.is_empty() {
        return MAP_PATH.to_owned();
    }

    // Same encoding as the browser's `URLSearchParams`, so links built here
    // match links built in the page.
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    format!("{MAP_PATH}?{encoded}")
}
