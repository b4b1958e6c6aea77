//! Base-zone rule table.
//!
//! Values are transcribed from the Seattle Municipal Code, Title 23. Treat the
//! table as a data asset: change it only to follow the code, never to suit a
//! caller. `max_height_ft` is 0 where a zone sets no numeric height cap.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::ZoneCategory::{self, Commercial, Downtown, Industrial, Mixed, Multifamily, Residential};

/// Development rules for one zone.
///
/// A height-suffixed code (`NC3-85`) overrides only `code`, `max_height` and
/// `max_height_ft`; everything else always comes from the base zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    pub code: Cow<'static, str>,
    pub name: &'static str,
    pub category: ZoneCategory,
    pub summary: &'static str,
    pub max_height: Cow<'static, str>,
    pub max_height_ft: u32,
    pub adu_allowed: u32,
    pub lot_coverage: &'static str,
    pub far: &'static str,
    pub smc_section: &'static str,
    pub smc_link: &'static str,
}

#[derive(Copy, Clone)]
struct Chapter {
    section: &'static str,
    link: &'static str,
}

macro_rules! chapter {
    ($section:literal, $node:literal) => {
        Chapter {
            section: concat!("SMC ", $section),
            link: concat!(
                "https://library.municode.com/wa/seattle/codes/municipal_code?nodeId=TIT23LAUSCO_SUBTITLE_IIILAUSRE_",
                $node
            ),
        }
    };
}

const NEIGHBORHOOD_RESIDENTIAL: Chapter = chapter!("23.44", "CH23.44NERE");
const MULTIFAMILY: Chapter = chapter!("23.45", "CH23.45MU");
const COMMERCIAL: Chapter = chapter!("23.47A", "CH23.47ACO");
const SEATTLE_MIXED: Chapter = chapter!("23.48", "CH23.48SEMI");
const DOWNTOWN: Chapter = chapter!("23.49", "CH23.49DOZO");
const PIONEER_SQUARE: Chapter = chapter!("23.66", "CH23.66SPREDI");
const INDUSTRIAL: Chapter = chapter!("23.50", "CH23.50IN");
const INDUSTRIAL_2023: Chapter = chapter!("23.50A", "CH23.50AINZO");

#[allow(clippy::too_many_arguments)]
const fn zone(
    code: &'static str,
    name: &'static str,
    category: ZoneCategory,
    summary: &'static str,
    max_height: &'static str,
    max_height_ft: u32,
    adu_allowed: u32,
    lot_coverage: &'static str,
    far: &'static str,
    chapter: Chapter,
) -> ZoneInfo {
    ZoneInfo {
        code: Cow::Borrowed(code),
        name,
        category,
        summary,
        max_height: Cow::Borrowed(max_height),
        max_height_ft,
        adu_allowed,
        lot_coverage,
        far,
        smc_section: chapter.section,
        smc_link: chapter.link,
    }
}

#[rustfmt::skip]
static ZONES: &[ZoneInfo] = &[
    // Neighborhood residential
    zone("NR1", "Neighborhood Residential 1", Residential,
        "Detached houses on large lots (9,600 sq ft minimum).",
        "30 ft", 30, 2, "35%", "0.5", NEIGHBORHOOD_RESIDENTIAL),
    zone("NR2", "Neighborhood Residential 2", Residential,
        "Detached houses on medium lots (7,200 sq ft minimum).",
        "30 ft", 30, 2, "35%", "0.5", NEIGHBORHOOD_RESIDENTIAL),
    zone("NR3", "Neighborhood Residential 3", Residential,
        "Detached houses on standard lots (5,000 sq ft minimum).",
        "30 ft", 30, 2, "35%", "0.5", NEIGHBORHOOD_RESIDENTIAL),
    zone("RSL", "Residential Small Lot", Residential,
        "Small houses, cottages and townhouses on compact lots.",
        "30 ft", 30, 1, "50%", "0.75", NEIGHBORHOOD_RESIDENTIAL),
    // Multifamily
    zone("LR1", "Lowrise 1", Multifamily,
        "Townhouses, rowhouses and small apartment buildings.",
        "30 ft", 30, 1, "No limit", "1.3", MULTIFAMILY),
    zone("LR2", "Lowrise 2", Multifamily,
        "Townhouses, rowhouses and low apartment buildings.",
        "40 ft", 40, 1, "No limit", "1.4", MULTIFAMILY),
    zone("LR3", "Lowrise 3", Multifamily,
        "Apartment buildings up to about four or five stories.",
        "50 ft", 50, 1, "No limit", "2.3", MULTIFAMILY),
    zone("MR", "Midrise", Multifamily,
        "Mid-rise apartment buildings near transit and urban centers.",
        "80 ft", 80, 0, "No limit", "4.25", MULTIFAMILY),
    zone("HR", "Highrise", Multifamily,
        "High-density residential towers.",
        "440 ft", 440, 0, "No limit", "14", MULTIFAMILY),
    // Commercial
    zone("NC1", "Neighborhood Commercial 1", Commercial,
        "Small pedestrian-oriented shopping areas serving the immediate neighborhood.",
        "30 ft", 30, 0, "No limit", "2.5", COMMERCIAL),
    zone("NC2", "Neighborhood Commercial 2", Commercial,
        "Pedestrian-oriented shopping districts with a mix of retail and housing.",
        "40 ft", 40, 0, "No limit", "3.0", COMMERCIAL),
    zone("NC3", "Neighborhood Commercial 3", Commercial,
        "Larger pedestrian-oriented business districts with housing above shops.",
        "65 ft", 65, 0, "No limit", "4.75", COMMERCIAL),
    zone("C1", "Commercial 1", Commercial,
        "Auto-oriented retail and service areas.",
        "40 ft", 40, 0, "No limit", "3.0", COMMERCIAL),
    zone("C2", "Commercial 2", Commercial,
        "Auto-oriented commercial areas with non-retail employment uses.",
        "40 ft", 40, 0, "No limit", "3.0", COMMERCIAL),
    // Mixed use
    zone("SM", "Seattle Mixed", Mixed,
        "Flexible mix of residential, office and commercial uses.",
        "85 ft", 85, 0, "No limit", "5", SEATTLE_MIXED),
    // Downtown
    zone("DOC1", "Downtown Office Core 1", Downtown,
        "Highest-density office core of downtown.",
        "Unlimited", 0, 0, "No limit", "6 (up to 20 with bonuses)", DOWNTOWN),
    zone("DOC2", "Downtown Office Core 2", Downtown,
        "High-density office and residential areas surrounding the core.",
        "500 ft", 500, 0, "No limit", "5 (up to 14 with bonuses)", DOWNTOWN),
    zone("DMC", "Downtown Mixed Commercial", Downtown,
        "Mixed office, retail and residential uses at downtown edges.",
        "240 ft", 240, 0, "No limit", "5 (up to 8 with bonuses)", DOWNTOWN),
    zone("DMR", "Downtown Mixed Residential", Downtown,
        "Predominantly residential downtown neighborhoods.",
        "85 ft", 85, 0, "No limit", "1 (residential exempt)", DOWNTOWN),
    zone("DRC", "Downtown Retail Core", Downtown,
        "Downtown shopping core with regional retail.",
        "150 ft", 150, 0, "No limit", "6 (up to 7 with bonuses)", DOWNTOWN),
    zone("DH1", "Downtown Harborfront 1", Downtown,
        "Waterfront piers and water-dependent uses.",
        "45 ft", 45, 0, "No limit", "3", DOWNTOWN),
    zone("DH2", "Downtown Harborfront 2", Downtown,
        "Upland harborfront with mixed uses.",
        "85 ft", 85, 0, "No limit", "4", DOWNTOWN),
    zone("PMM", "Pike Market Mixed", Downtown,
        "Pike Place Market historic district.",
        "85 ft", 85, 0, "No limit", "No limit", DOWNTOWN),
    zone("PSM", "Pioneer Square Mixed", Downtown,
        "Pioneer Square preservation district.",
        "100 ft", 100, 0, "No limit", "No limit", PIONEER_SQUARE),
    zone("IDM", "International District Mixed", Downtown,
        "Chinatown-International District mixed-use core.",
        "85 ft", 85, 0, "No limit", "3", DOWNTOWN),
    // Industrial
    zone("IB", "Industrial Buffer", Industrial,
        "Transition between industrial areas and adjacent neighborhoods.",
        "45 ft", 45, 0, "No limit", "2.5", INDUSTRIAL),
    zone("IC", "Industrial Commercial", Industrial,
        "Light industrial and commercial uses, including research and development.",
        "45 ft", 45, 0, "No limit", "2.5", INDUSTRIAL),
    zone("IG1", "General Industrial 1", Industrial,
        "Heavy industry, port and rail-related uses.",
        "85 ft", 85, 0, "No limit", "2.5", INDUSTRIAL),
    zone("IG2", "General Industrial 2", Industrial,
        "General manufacturing and industrial uses.",
        "85 ft", 85, 0, "No limit", "2.5", INDUSTRIAL),
    zone("MML", "Maritime, Manufacturing and Logistics", Industrial,
        "Core industrial land reserved for maritime, manufacturing and logistics.",
        "65 ft", 65, 0, "No limit", "0.75", INDUSTRIAL_2023),
    zone("II", "Industry and Innovation", Industrial,
        "Dense, transit-served employment mixing industry with offices and labs.",
        "85 ft", 85, 0, "No limit", "4.5", INDUSTRIAL_2023),
    zone("UI", "Urban Industrial", Industrial,
        "Small-scale industrial and maker spaces next to neighborhoods.",
        "65 ft", 65, 0, "No limit", "3", INDUSTRIAL_2023),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static ZoneInfo>> = Lazy::new(|| {
    ZONES
        .iter()
        .map(|zone| (&*zone.code, zone))
        .collect()
});

pub(crate) fn base_zone(code: &str) -> Option<&'static ZoneInfo> {
    BY_CODE.get(code).copied()
}

/// Every base code in the table, in table order.
pub fn get_all_zone_codes() -> Vec<&'static str> {
    ZONES.iter().map(|zone| &*zone.code).collect()
}

pub fn zones_in_category(category: ZoneCategory) -> Vec<&'static ZoneInfo> {
    ZONES.iter().filter(|zone| zone.category == category).collect()
}
