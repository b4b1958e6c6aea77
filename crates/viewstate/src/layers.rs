/// Layers shown when the URL carries no `layers` parameter at all.
pub const DEFAULT_LAYERS: &[&str] = &["zoning"];

pub fn default_layers() -> Vec<String> {
    DEFAULT_LAYERS.iter().map(|s| (*s).to_owned()).collect()
}

/// Parse the raw `layers` parameter.
///
/// `None` (parameter absent) yields [`DEFAULT_LAYERS`]; `Some("")` (parameter
/// present but empty) yields no layers. Callers rely on the two staying
/// distinct: "never touched" versus "explicitly cleared".
pub fn parse_layers(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return default_layers();
    };
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join layer ids with `,`. An empty selection serializes to `""`; whether the
/// parameter is then emitted or omitted is the URL builder's decision.
pub fn serialize_layers<S: AsRef<str>>(layers: &[S]) -> String {
    let parts: Vec<&str> = layers.iter().map(AsRef::as_ref).collect();
    parts.join(",")
}
