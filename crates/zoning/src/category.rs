use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneCategory {
    Residential,
    Multifamily,
    Commercial,
    Mixed,
    Downtown,
    Industrial,
}

impl ZoneCategory {
    /// Legend order.
    pub const ALL: [ZoneCategory; 6] = [
        ZoneCategory::Residential,
        ZoneCategory::Multifamily,
        ZoneCategory::Commercial,
        ZoneCategory::Mixed,
        ZoneCategory::Downtown,
        ZoneCategory::Industrial,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ZoneCategory::Residential => "residential",
            ZoneCategory::Multifamily => "multifamily",
            ZoneCategory::Commercial => "commercial",
            ZoneCategory::Mixed => "mixed",
            ZoneCategory::Downtown => "downtown",
            ZoneCategory::Industrial => "industrial",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ZoneCategory::Residential => "Residential",
            ZoneCategory::Multifamily => "Multi-Family",
            ZoneCategory::Commercial => "Commercial",
            ZoneCategory::Mixed => "Mixed Use",
            ZoneCategory::Downtown => "Downtown",
            ZoneCategory::Industrial => "Industrial",
        }
    }
}

impl std::fmt::Display for ZoneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl std::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown zone category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for ZoneCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Display label for a raw category name. Unknown names come back unchanged.
pub fn get_category_label(category: &str) -> &str {
    match category.parse::<ZoneCategory>() {
        Ok(c) => c.label(),
        Err(_) => category,
    }
}
