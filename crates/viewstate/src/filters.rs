//! Per-layer filter selections.
//!
//! Wire format: `;`-separated groups of `layerId.filterId:v1,v2`, e.g.
//! `zoning.category:residential,multifamily;transit.mode:bus`.

use std::collections::BTreeMap;

use tracing::debug;

/// layer id -> filter id -> selected values.
///
/// `BTreeMap` keeps serialization order deterministic. An empty value list is
/// equivalent to the entry being absent.
pub type FilterState = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Parse a `filters` parameter. Malformed segments are dropped, never fatal.
///
/// A later segment for the same `(layer, filter)` pair replaces an earlier one.
pub fn parse_filters(raw: &str) -> FilterState {
    let mut out = FilterState::new();
    for segment in raw.split(';').filter(|s| !s.is_empty()) {
        let Some((layer, filter, values)) = parse_segment(segment) else {
            debug!(segment, "dropping malformed filter segment");
            continue;
        };
        out.entry(layer.to_owned())
            .or_default()
            .insert(filter.to_owned(), values);
    }
    out
}

fn parse_segment(segment: &str) -> Option<(&str, &str, Vec<String>)> {
    let (key, value) = segment.split_once(':')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    // Split on the first dot only; filter ids may themselves contain dots.
    let (layer, filter) = key.split_once('.')?;
    if layer.is_empty() || filter.is_empty() {
        return None;
    }
    let values: Vec<String> = value
        .split(',')
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();
    if values.is_empty() {
        return None;
    }
    Some((layer, filter, values))
}

/// Serialize filters, omitting every pair whose value list is empty.
pub fn serialize_filters(filters: &FilterState) -> String {
    let mut groups: Vec<String> = Vec::new();
    for (layer, by_filter) in filters {
        for (filter, values) in by_filter {
            let values: Vec<&str> = values
                .iter()
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .collect();
            if values.is_empty() {
                continue;
            }
            groups.push(format!("{layer}.{filter}:{}", values.join(",")));
        }
    }
    groups.join(";")
}

/// Drop empty values, empty value lists and layers left with no filters.
///
/// `parse_filters(&serialize_filters(&x)) == normalize_filters(&x)` for any
/// filter map whose ids and values contain no separator characters.
pub fn normalize_filters(filters: &FilterState) -> FilterState {
    let mut out = FilterState::new();
    for (layer, by_filter) in filters {
        let kept: BTreeMap<String, Vec<String>> = by_filter
            .iter()
            .filter_map(|(filter, values)| {
                let values: Vec<String> =
                    values.iter().filter(|v| !v.is_empty()).cloned().collect();
                (!values.is_empty()).then(|| (filter.clone(), values))
            })
            .collect();
        if !kept.is_empty() {
            out.insert(layer.clone(), kept);
        }
    }
    out
}
