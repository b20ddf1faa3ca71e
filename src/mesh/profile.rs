//! Fusiform profile mesh builder
//!
//! Sweeps the radius profile `r(t) = base_radius * (1 - |2t - 1|)^shape_exponent`
//! around the local z axis. Both poles are rings of coincident zero-radius
//! vertices rather than single merged vertices, so every ring has the same
//! vertex count and faces never need a triangle fan.

use crate::error::{ensure_finite, MuscleGenError, Result};
use crate::mesh::types::{
    BaseMesh, MeshProfile, Point, QuadFace, DEFAULT_LONGITUDINAL_RINGS, DEFAULT_RADIAL_SEGMENTS,
    DEFAULT_SHAPE_EXPONENT,
};
use std::f64::consts::TAU;

impl MeshProfile {
    /// Create a validated profile
    pub fn new(
        length: f64,
        base_radius: f64,
        shape_exponent: f64,
        radial_segments: usize,
        longitudinal_rings: usize,
    ) -> Result<Self> {
        let profile = Self {
            length,
            base_radius,
            shape_exponent,
            radial_segments,
            longitudinal_rings,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Profile with the default exponent and resolution
    pub fn with_defaults(length: f64, base_radius: f64) -> Result<Self> {
        Self::new(
            length,
            base_radius,
            DEFAULT_SHAPE_EXPONENT,
            DEFAULT_RADIAL_SEGMENTS,
            DEFAULT_LONGITUDINAL_RINGS,
        )
    }

    /// Check every precondition, reporting the first violated one
    pub fn validate(&self) -> Result<()> {
        ensure_finite("length", self.length)?;
        if self.length <= 0.0 {
            return Err(MuscleGenError::invalid(
                "length",
                self.length,
                "must be > 0",
            ));
        }

        ensure_finite("base_radius", self.base_radius)?;
        if self.base_radius <= 0.0 {
            return Err(MuscleGenError::invalid(
                "base_radius",
                self.base_radius,
                "must be > 0",
            ));
        }

        ensure_finite("shape_exponent", self.shape_exponent)?;
        if self.shape_exponent < 1.0 {
            return Err(MuscleGenError::invalid(
                "shape_exponent",
                self.shape_exponent,
                "must be >= 1",
            ));
        }

        if self.radial_segments < 3 {
            return Err(MuscleGenError::invalid(
                "radial_segments",
                self.radial_segments,
                "must be >= 3 to form a closed loop",
            ));
        }

        if self.longitudinal_rings < 2 {
            return Err(MuscleGenError::invalid(
                "longitudinal_rings",
                self.longitudinal_rings,
                "must be >= 2 to have a belly between the two poles",
            ));
        }

        Ok(())
    }

    /// Normalized axial position of ring `i`, 0 at one pole and 1 at the other
    pub fn ring_t(&self, ring: usize) -> f64 {
        ring as f64 / self.longitudinal_rings as f64
    }

    /// Axial coordinate of ring `i`, centered on the origin
    pub fn ring_z(&self, ring: usize) -> f64 {
        self.length * (self.ring_t(ring) - 0.5)
    }

    /// Radius of ring `i`
    pub fn ring_radius(&self, ring: usize) -> f64 {
        fusiform_radius(self.base_radius, self.shape_exponent, self.ring_t(ring))
    }

    /// Build the mesh for this profile
    pub fn build(&self) -> Result<BaseMesh> {
        self.validate()?;

        let segments = self.radial_segments;
        let mut vertices = Vec::with_capacity(self.expected_vertices());

        for ring in 0..self.num_rings() {
            let z = self.ring_z(ring);
            let r = self.ring_radius(ring);
            for j in 0..segments {
                let a = TAU * j as f64 / segments as f64;
                vertices.push(Point::new(r * a.cos(), r * a.sin(), z));
            }
        }

        let mut faces = Vec::with_capacity(self.expected_faces());
        for ring in 0..self.longitudinal_rings {
            let lower = ring * segments;
            let upper = (ring + 1) * segments;
            for j in 0..segments {
                let next = (j + 1) % segments;
                faces.push(QuadFace::new([
                    lower + j,
                    lower + next,
                    upper + next,
                    upper + j,
                ]));
            }
        }

        log::debug!(
            "Built fusiform mesh: {} vertices, {} faces (length {}, radius {}, exponent {})",
            vertices.len(),
            faces.len(),
            self.length,
            self.base_radius,
            self.shape_exponent
        );

        Ok(BaseMesh {
            profile: *self,
            vertices,
            faces,
        })
    }
}

/// Closed-form fusiform radius at normalized position `t` in `[0, 1]`
pub fn fusiform_radius(base_radius: f64, shape_exponent: f64, t: f64) -> f64 {
    let taper = (1.0 - (2.0 * t - 1.0).abs()).max(0.0);
    base_radius * taper.powf(shape_exponent)
}

/// Build a fusiform muscle mesh
///
/// Produces `radial_segments * (longitudinal_rings + 1)` vertices and
/// `radial_segments * longitudinal_rings` outward-wound quads.
///
/// # Errors
/// [`MuscleGenError::InvalidParameter`] naming the first argument that violates
/// its precondition.
pub fn build_profile_mesh(
    length: f64,
    base_radius: f64,
    shape_exponent: f64,
    radial_segments: usize,
    longitudinal_rings: usize,
) -> Result<BaseMesh> {
    MeshProfile::new(
        length,
        base_radius,
        shape_exponent,
        radial_segments,
        longitudinal_rings,
    )?
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::geometry::{compute_face_centroid, compute_face_normal, radial_distance};
    use approx::assert_relative_eq;

    #[test]
    fn test_counts() {
        let mesh = build_profile_mesh(1.0, 0.3, 2.0, 8, 5).unwrap();
        assert_eq!(mesh.num_vertices(), 8 * 6);
        assert_eq!(mesh.num_faces(), 8 * 5);
    }

    #[test]
    fn test_reference_mesh() {
        let mesh = build_profile_mesh(2.0, 0.5, 1.9, 4, 2).unwrap();
        assert_eq!(mesh.num_vertices(), 12);

        let belly = mesh.ring(1).unwrap();
        for v in belly {
            assert_eq!(radial_distance(v), 0.5);
            assert_eq!(v.z, 0.0);
        }
        assert_eq!(belly[0], Point::new(0.5, 0.0, 0.0));
        assert_relative_eq!(belly[1].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(belly[1].y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(belly[2].x, -0.5, epsilon = 1e-12);
        assert_relative_eq!(belly[3].y, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_radii_follow_profile() {
        let mesh = build_profile_mesh(1.7, 0.42, 1.9, 12, 9).unwrap();
        let p = mesh.profile;
        for ring in 0..p.num_rings() {
            let t = ring as f64 / p.longitudinal_rings as f64;
            let expected = p.base_radius * (1.0 - (2.0 * t - 1.0).abs()).powf(p.shape_exponent);
            for v in mesh.ring(ring).unwrap() {
                assert_relative_eq!(radial_distance(v), expected, epsilon = 1e-12, max_relative = 1e-9);
                assert_relative_eq!(v.z, p.ring_z(ring), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_poles_are_degenerate() {
        for &(rings, exponent) in &[(2, 1.0), (7, 1.9), (26, 5.0)] {
            let mesh = build_profile_mesh(1.0, 0.4, exponent, 6, rings).unwrap();
            for v in mesh.ring(0).unwrap().iter().chain(mesh.ring(rings).unwrap()) {
                assert_eq!(radial_distance(v), 0.0);
            }
            assert_relative_eq!(mesh.ring(0).unwrap()[0].z, -0.5);
            assert_relative_eq!(mesh.ring(rings).unwrap()[0].z, 0.5);
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        let mesh = build_profile_mesh(3.0, 0.7, 2.5, 10, 11).unwrap();
        let rings = mesh.profile.longitudinal_rings;
        for ring in 0..=rings {
            let lower = mesh.ring(ring).unwrap();
            let upper = mesh.ring(rings - ring).unwrap();
            for (a, b) in lower.iter().zip(upper) {
                assert_relative_eq!(radial_distance(a), radial_distance(b), epsilon = 1e-12);
                assert_relative_eq!(a.z, -b.z, epsilon = 1e-12);
                assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
                assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_faces_wrap_and_face_outward() {
        let mesh = build_profile_mesh(2.0, 0.5, 1.5, 6, 6).unwrap();

        // last face of the first span wraps back to segment 0
        assert_eq!(mesh.faces[5].node_ids, [5, 0, 6, 11]);

        // skip pole-adjacent spans, whose quads collapse to triangles
        for face in &mesh.faces[6..mesh.num_faces() - 6] {
            let normal = compute_face_normal(face, &mesh.vertices).unwrap();
            let centroid = compute_face_centroid(face, &mesh.vertices).unwrap();
            let outward = normal.x * centroid.x + normal.y * centroid.y;
            assert!(outward > 0.0, "face {:?} points inward", face.node_ids);
        }
    }

    #[test]
    fn test_linear_exponent_is_conical() {
        let mesh = build_profile_mesh(2.0, 1.0, 1.0, 3, 4).unwrap();
        assert_relative_eq!(mesh.profile.ring_radius(1), 0.5, epsilon = 1e-12);
        assert_relative_eq!(mesh.profile.ring_radius(2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_large_exponent_stays_finite() {
        let mesh = build_profile_mesh(1.0, 0.5, 1.0e6, 5, 4).unwrap();
        assert!(mesh.vertices.iter().all(|v| v.coords.iter().all(|c| c.is_finite())));
        assert_relative_eq!(mesh.profile.ring_radius(2), 0.5);
        assert_eq!(mesh.profile.ring_radius(1), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (build_profile_mesh(0.0, 0.5, 1.9, 4, 2), "length"),
            (build_profile_mesh(-1.0, 0.5, 1.9, 4, 2), "length"),
            (build_profile_mesh(f64::NAN, 0.5, 1.9, 4, 2), "length"),
            (build_profile_mesh(1.0, 0.0, 1.9, 4, 2), "base_radius"),
            (build_profile_mesh(1.0, 0.5, 0.99, 4, 2), "shape_exponent"),
            (build_profile_mesh(1.0, 0.5, f64::INFINITY, 4, 2), "shape_exponent"),
            (build_profile_mesh(1.0, 0.5, 1.9, 2, 2), "radial_segments"),
            (build_profile_mesh(1.0, 0.5, 1.9, 4, 1), "longitudinal_rings"),
        ];

        for (result, expected) in cases {
            match result {
                Err(MuscleGenError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected InvalidParameter for {}, got {:?}", expected, other),
            }
        }
    }
}
