//! End-to-end muscle asset generation
//!
//! Combines the profile builder, bulge generator and tendon classification
//! into a single index-aligned asset a host can import in one step.

use crate::error::{MuscleGenError, Result};
use crate::mesh::bulge::{
    build_bulge_target_with_falloff, DEFAULT_BULGE_FACTOR, DEFAULT_FALLOFF_EXPONENT,
};
use crate::mesh::tendon::tendon_faces;
use crate::mesh::types::{BaseMesh, BulgeTarget, MeshProfile};
use crate::preset::MusclePreset;
use crate::response::ResponseKind;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything needed to generate one muscle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleSpec {
    /// Asset name
    pub name: String,

    /// Surface profile
    pub profile: MeshProfile,

    /// Radial scale of the bulge target at the belly
    pub bulge_factor: f64,

    /// Longitudinal falloff exponent of the bulge
    pub falloff_exponent: f64,

    /// Control-signal response
    pub response: ResponseKind,

    /// Percentage of each end treated as tendon
    pub tendon_percent: f64,
}

impl MuscleSpec {
    /// Spec for a preset muscle spanning `joint_distance`
    ///
    /// The preset radius becomes the base radius and the length is the joint
    /// distance scaled by the preset length multiplier.
    pub fn from_preset(preset: &MusclePreset, joint_distance: f64) -> Result<Self> {
        preset.validate()?;
        let profile =
            MeshProfile::with_defaults(joint_distance * preset.length_multiplier, preset.radius)
                .map_err(|e| match e {
                    MuscleGenError::InvalidParameter { name: "length", .. } => {
                        MuscleGenError::invalid("joint_distance", joint_distance, "must be > 0")
                    }
                    other => other,
                })?;

        Ok(Self {
            name: preset.name.clone(),
            profile,
            bulge_factor: DEFAULT_BULGE_FACTOR,
            falloff_exponent: DEFAULT_FALLOFF_EXPONENT,
            response: preset.response,
            tendon_percent: preset.tendon_percent,
        })
    }
}

/// Generated muscle: base mesh, bulge target and tendon region
#[derive(Debug, Clone)]
pub struct MuscleAsset {
    /// Asset name
    pub name: String,

    /// Rest-state surface
    pub base: BaseMesh,

    /// Bulged vertex set aligned with `base.vertices`
    pub bulge: BulgeTarget,

    /// Face indices in the tendon region
    pub tendon_faces: Vec<usize>,

    /// Control-signal response
    pub response: ResponseKind,
}

impl MuscleAsset {
    /// Whether face `idx` belongs to the tendon region
    pub fn is_tendon_face(&self, idx: usize) -> bool {
        self.tendon_faces.binary_search(&idx).is_ok()
    }
}

/// Generate one muscle asset
pub fn generate_muscle(spec: &MuscleSpec) -> Result<MuscleAsset> {
    let base = spec.profile.build()?;
    let bulge = build_bulge_target_with_falloff(&base, spec.bulge_factor, spec.falloff_exponent)?;
    let tendon_faces = tendon_faces(&base, spec.tendon_percent)?;

    log::debug!(
        "Generated muscle '{}': {} vertices, {} faces, {} tendon faces, {} response",
        spec.name,
        base.num_vertices(),
        base.num_faces(),
        tendon_faces.len(),
        spec.response
    );

    Ok(MuscleAsset {
        name: spec.name.clone(),
        base,
        bulge,
        tendon_faces,
        response: spec.response,
    })
}

/// Generate many muscle assets; the first failure aborts the batch
pub fn generate_batch(specs: &[MuscleSpec]) -> Result<Vec<MuscleAsset>> {
    log::info!("Generating {} muscles", specs.len());

    #[cfg(feature = "parallel")]
    let assets: Result<Vec<MuscleAsset>> = specs.par_iter().map(generate_muscle).collect();

    #[cfg(not(feature = "parallel"))]
    let assets: Result<Vec<MuscleAsset>> = specs.iter().map(generate_muscle).collect();

    assets
}
