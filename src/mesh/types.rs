//! Core mesh data structures

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 3D point type (a mesh vertex in the muscle's local frame, z along the axis)
pub type Point = Point3<f64>;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Default shape exponent of the fusiform radius profile
pub const DEFAULT_SHAPE_EXPONENT: f64 = 1.9;

/// Default number of vertices per ring
pub const DEFAULT_RADIAL_SEGMENTS: usize = 40;

/// Default number of ring-to-ring spans along the axis
pub const DEFAULT_LONGITUDINAL_RINGS: usize = 26;

/// Quadrilateral face with 4 vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadFace {
    /// Vertex indices, counter-clockwise when viewed from outside
    pub node_ids: [usize; 4],
}

impl QuadFace {
    /// Create a new quad face
    pub fn new(node_ids: [usize; 4]) -> Self {
        Self { node_ids }
    }
}

/// Parameters of a fusiform surface of revolution
///
/// Immutable once validated; [`MeshProfile::new`] is the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshProfile {
    /// Total length along the local z axis (world units)
    pub length: f64,

    /// Radius at the belly (t = 0.5)
    pub base_radius: f64,

    /// Taper sharpness; 1 is conical, larger values flatten the belly
    pub shape_exponent: f64,

    /// Vertices per ring
    pub radial_segments: usize,

    /// Number of spans between rings (there are `longitudinal_rings + 1` rings)
    pub longitudinal_rings: usize,
}

impl MeshProfile {
    /// Half of the profile length, the distance from the belly to either pole
    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }

    /// Number of rings, poles included
    pub fn num_rings(&self) -> usize {
        self.longitudinal_rings + 1
    }

    /// Vertex count a mesh built from this profile will have
    pub fn expected_vertices(&self) -> usize {
        self.radial_segments * self.num_rings()
    }

    /// Face count a mesh built from this profile will have
    pub fn expected_faces(&self) -> usize {
        self.radial_segments * self.longitudinal_rings
    }
}

/// Generated muscle surface
#[derive(Debug, Clone)]
pub struct BaseMesh {
    /// Profile this mesh was generated from
    pub profile: MeshProfile,

    /// Vertices, ring-major: index = ring * radial_segments + segment
    pub vertices: Vec<Point>,

    /// Quad faces joining ring i to ring i + 1
    pub faces: Vec<QuadFace>,
}

impl BaseMesh {
    /// Get total number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get number of rings
    pub fn num_rings(&self) -> usize {
        self.profile.num_rings()
    }

    /// Index of the vertex at `segment` within `ring`
    pub fn vertex_index(&self, ring: usize, segment: usize) -> usize {
        ring * self.profile.radial_segments + segment
    }

    /// Vertices of one ring, or `None` if the ring does not exist
    pub fn ring(&self, ring: usize) -> Option<&[Point]> {
        if ring >= self.num_rings() {
            return None;
        }
        let start = self.vertex_index(ring, 0);
        self.vertices
            .get(start..start + self.profile.radial_segments)
    }
}

/// Bulged vertex set, index-aligned with [`BaseMesh::vertices`]
#[derive(Debug, Clone)]
pub struct BulgeTarget {
    /// Radial scale at the belly
    pub bulge_factor: f64,

    /// Exponent of the longitudinal falloff
    pub falloff_exponent: f64,

    /// Vertex `i` is the bulged position of base vertex `i`
    pub vertices: Vec<Point>,
}

impl BulgeTarget {
    /// Get total number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Per-vertex displacement from `base` to this target
    pub fn displacements(&self, base: &BaseMesh) -> Vec<Vec3> {
        self.vertices
            .iter()
            .zip(&base.vertices)
            .map(|(target, origin)| target - origin)
            .collect()
    }
}
