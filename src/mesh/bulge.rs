//! Bulge target generation
//!
//! The bulge target is a second vertex set for the base mesh, pushed radially
//! outward with a falloff from the belly toward both poles. Index `i` of the
//! target is always the same topological vertex as index `i` of the base mesh.

use crate::error::{ensure_finite, MuscleGenError, Result};
use crate::mesh::types::{BaseMesh, BulgeTarget, Point};

/// Default longitudinal falloff exponent
pub const DEFAULT_FALLOFF_EXPONENT: f64 = 1.3;

/// Default radial scale at the belly
pub const DEFAULT_BULGE_FACTOR: f64 = 1.4;

/// Radial scale factor for a vertex at axial coordinate `z`
///
/// `d = |z| / half_length` clamped to `[0, 1]`, `w = 1 - d^p`, and the scale
/// interpolates from 1 at the poles to `bulge_factor` at the belly. Written as
/// `(1 - w) + w * bulge_factor` so both endpoints are exact.
///
/// `half_length` must be positive and finite, as it is for any validated
/// [`MeshProfile`](crate::mesh::MeshProfile); a zero half length yields NaN at `z = 0`.
pub fn bulge_scale(z: f64, half_length: f64, bulge_factor: f64, falloff_exponent: f64) -> f64 {
    let d = (z.abs() / half_length).clamp(0.0, 1.0);
    let w = 1.0 - d.powf(falloff_exponent);
    (1.0 - w) + w * bulge_factor
}

/// Build the bulge target with the default falloff exponent
pub fn build_bulge_target(base: &BaseMesh, bulge_factor: f64) -> Result<BulgeTarget> {
    build_bulge_target_with_falloff(base, bulge_factor, DEFAULT_FALLOFF_EXPONENT)
}

/// Build the bulge target
///
/// Only x and y scale; z is copied unchanged so the muscle keeps its length.
/// A `bulge_factor` at or below 1 shrinks instead of bulging, which is allowed.
pub fn build_bulge_target_with_falloff(
    base: &BaseMesh,
    bulge_factor: f64,
    falloff_exponent: f64,
) -> Result<BulgeTarget> {
    ensure_finite("bulge_factor", bulge_factor)?;
    ensure_finite("falloff_exponent", falloff_exponent)?;
    if falloff_exponent <= 0.0 {
        return Err(MuscleGenError::invalid(
            "falloff_exponent",
            falloff_exponent,
            "must be > 0",
        ));
    }
    base.profile.validate()?;

    let half_length = base.profile.half_length();
    let vertices: Vec<Point> = base
        .vertices
        .iter()
        .map(|v| {
            let s = bulge_scale(v.z, half_length, bulge_factor, falloff_exponent);
            Point::new(v.x * s, v.y * s, v.z)
        })
        .collect();

    if bulge_factor <= 1.0 {
        log::debug!(
            "Bulge factor {} <= 1.0, target will shrink the muscle",
            bulge_factor
        );
    }
    log::debug!(
        "Built bulge target: {} vertices (factor {}, falloff {})",
        vertices.len(),
        bulge_factor,
        falloff_exponent
    );

    Ok(BulgeTarget {
        bulge_factor,
        falloff_exponent,
        vertices,
    })
}

/// Blend base and target positions by `weight`
///
/// Mirrors how a host evaluates a shape target: `weight` is clamped to
/// `[0, 1]` and each vertex moves linearly toward its target.
pub fn blend_vertices(base: &[Point], target: &[Point], weight: f64) -> Result<Vec<Point>> {
    ensure_finite("weight", weight)?;
    if base.len() != target.len() {
        return Err(MuscleGenError::invalid(
            "target",
            format!("{} vertices", target.len()),
            format!("must match base vertex count {}", base.len()),
        ));
    }

    let w = weight.clamp(0.0, 1.0);
    Ok(base
        .iter()
        .zip(target)
        .map(|(b, t)| b + (t - b) * w)
        .collect())
}
