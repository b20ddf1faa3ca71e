//! Tendon region classification
//!
//! The tapered ends of a muscle are tendon rather than belly. A face belongs to
//! the tendon region when its centroid lies within the outer tendon band.

use crate::error::{ensure_finite, MuscleGenError, Result};
use crate::mesh::geometry::compute_face_centroid;
use crate::mesh::types::BaseMesh;

/// Widening applied to the tendon percentage when computing the band cutoff
const TENDON_BAND_SCALE: f64 = 1.2;

/// Axial distance from the center beyond which faces are tendon
pub fn tendon_cutoff(half_length: f64, tendon_percent: f64) -> f64 {
    half_length * (1.0 - tendon_percent / 100.0 * TENDON_BAND_SCALE)
}

/// Indices of faces in the tendon region, in ascending order
pub fn tendon_faces(mesh: &BaseMesh, tendon_percent: f64) -> Result<Vec<usize>> {
    ensure_finite("tendon_percent", tendon_percent)?;
    if !(0.0..=100.0).contains(&tendon_percent) {
        return Err(MuscleGenError::invalid(
            "tendon_percent",
            tendon_percent,
            "must be within [0, 100]",
        ));
    }

    let cutoff = tendon_cutoff(mesh.profile.half_length(), tendon_percent);

    let mut faces = Vec::new();
    for (idx, face) in mesh.faces.iter().enumerate() {
        let centroid = compute_face_centroid(face, &mesh.vertices)?;
        if centroid.z.abs() > cutoff {
            faces.push(idx);
        }
    }

    log::debug!(
        "Tendon region: {} of {} faces beyond |z| > {:.4}",
        faces.len(),
        mesh.num_faces(),
        cutoff
    );

    Ok(faces)
}
