pub mod bounds;
pub mod coords;
pub mod math;

// Foundation crate: thin lng/lat wrappers over `geo`.
pub use bounds::*;
pub use coords::*;
pub use math::*;
