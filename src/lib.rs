//! Muscle Gen Library
//!
//! Procedural fusiform muscle meshes and bulge deformation targets for
//! character rigging. The host application owns skinning, simulation and
//! blending; this crate produces index-aligned geometry plus the blend-weight
//! convention the host applies.

pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod mesh;
pub mod placement;
pub mod preset;
pub mod response;

pub use error::{MuscleGenError, Result};
pub use generator::{generate_batch, generate_muscle, MuscleAsset, MuscleSpec};
pub use mesh::{build_bulge_target, build_profile_mesh, BaseMesh, BulgeTarget, MeshProfile};
pub use response::{response_curve, ResponseKind};
