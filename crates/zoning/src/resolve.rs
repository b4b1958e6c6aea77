use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::ZoneInfo;
use crate::table::base_zone;

/// `NC3-85`, `LR2/40`: base code, then a height in feet.
static HEIGHT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]+[0-9]?)[-/]([0-9]+)$").expect("height suffix pattern is valid")
});

/// `LR2(M)`: base code with an optional mixed-use marker.
static MIXED_USE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]+[0-9]?)(?:\(M\))?$").expect("mixed-use suffix pattern is valid")
});

/// Resolve a raw zoning code to its rules.
///
/// Resolution order, first match wins:
/// 1. exact base code (case and surrounding whitespace ignored);
/// 2. base code with a height suffix: the base record with `code` and the
///    height fields replaced. `max_height` repeats the digits as written;
///    `max_height_ft` saturates at `u32::MAX`;
/// 3. base code with a `(M)` marker: the base record unchanged.
///
/// Returns `None` for empty or unrecognized codes.
pub fn get_zone_info(raw: &str) -> Option<ZoneInfo> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return None;
    }

    if let Some(zone) = base_zone(&code) {
        return Some(zone.clone());
    }

    if let Some(caps) = HEIGHT_SUFFIX.captures(&code)
        && let Some(zone) = base_zone(&caps[1])
    {
        // The pattern only admits ASCII digits, so parsing can fail on overflow alone.
        let height_ft = caps[2].parse::<u32>().unwrap_or(u32::MAX);
        trace!(code = code.as_str(), base = &caps[1], height_ft, "resolved height-suffixed zone");
        return Some(ZoneInfo {
            max_height: Cow::Owned(format!("{} ft", &caps[2])),
            max_height_ft: height_ft,
            code: Cow::Owned(code),
            ..zone.clone()
        });
    }

    if let Some(caps) = MIXED_USE_SUFFIX.captures(&code)
        && let Some(zone) = base_zone(&caps[1])
    {
        trace!(code = code.as_str(), base = &caps[1], "resolved mixed-use zone");
        return Some(zone.clone());
    }

    trace!(code = code.as_str(), "unrecognized zone code");
    None
}
