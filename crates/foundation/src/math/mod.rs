pub mod geodesy;
pub mod polygon;

pub use geodesy::*;
pub use polygon::*;
