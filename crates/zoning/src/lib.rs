//! Zoning-code resolution.
//!
//! Maps raw zoning codes as they appear in parcel GIS attributes (`NR1`,
//! `nc3-65`, `LR2(M)`) to structured development rules from a fixed table of
//! Seattle Municipal Code base zones.

pub mod category;
pub mod resolve;
pub mod table;

pub use category::*;
pub use resolve::*;
pub use table::{ZoneInfo, get_all_zone_codes, zones_in_category};
