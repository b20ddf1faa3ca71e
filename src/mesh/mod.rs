//! Mesh data structures and operations

pub mod bulge;
pub mod geometry;
pub mod profile;
pub mod tendon;
pub mod types;

pub use bulge::*;
pub use geometry::*;
pub use profile::*;
pub use tendon::*;
pub use types::*;
