//! Map view-state codec.
//!
//! Converts between in-memory map/UI state and the flat, human-editable query
//! string carried by `/map` URLs:
//! - camera position (`lat`, `lng`, `z`)
//! - active layers (`layers=zoning,transit`)
//! - per-layer filter selections (`filters=zoning.category:residential,mixed`)
//! - inspected feature and compare mode (`inspect`, `compare`)
//!
//! Every function here is total: malformed input degrades to partial or
//! default state, never to an error.

pub mod camera;
pub mod filters;
pub mod layers;
pub mod query;
pub mod share;

pub use camera::*;
pub use filters::*;
pub use layers::*;
pub use query::*;
pub use share::*;
