//! Placing a muscle between two joint positions
//!
//! The generated mesh lives in a local frame centered on the origin with its
//! axis along +Z. Placement maps that frame onto the segment between two joint
//! heads: centered at the midpoint, +Z pointing from the first joint to the
//! second, local +Y kept as close to world +Y as possible.

use crate::error::{ensure_finite, MuscleGenError, Result};
use crate::mesh::types::{Point, Vec3};
use nalgebra::UnitQuaternion;

/// Minimum joint separation accepted for placement
const MIN_JOINT_DISTANCE: f64 = 1e-9;

/// World-space placement of a muscle's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusclePlacement {
    /// Muscle length after the length multiplier is applied
    pub length: f64,

    /// Midpoint between the two joint heads
    pub midpoint: Point,

    /// Rotation taking local +Z onto the joint direction
    pub rotation: UnitQuaternion<f64>,
}

impl MusclePlacement {
    /// Place a muscle spanning `head_a` to `head_b`
    pub fn between_joints(head_a: Point, head_b: Point, length_multiplier: f64) -> Result<Self> {
        ensure_finite("length_multiplier", length_multiplier)?;
        if length_multiplier <= 0.0 {
            return Err(MuscleGenError::invalid(
                "length_multiplier",
                length_multiplier,
                "must be > 0",
            ));
        }

        let direction = head_b - head_a;
        let distance = direction.norm();
        if !distance.is_finite() || distance < MIN_JOINT_DISTANCE {
            return Err(MuscleGenError::invalid(
                "joint_distance",
                distance,
                "joint heads must be distinct finite points",
            ));
        }

        let midpoint = head_a + direction * 0.5;
        let rotation = track_z_up_y(&direction);

        Ok(Self {
            length: distance * length_multiplier,
            midpoint,
            rotation,
        })
    }

    /// Map a vertex from the muscle's local frame into world space
    pub fn to_world(&self, local: &Point) -> Point {
        self.midpoint + self.rotation * local.coords
    }

    /// Map every vertex of a local vertex set into world space
    pub fn transform_all(&self, vertices: &[Point]) -> Vec<Point> {
        vertices.iter().map(|v| self.to_world(v)).collect()
    }
}

/// Rotation mapping +Z onto `direction`, with +Y as the up hint
fn track_z_up_y(direction: &Vec3) -> UnitQuaternion<f64> {
    let up = Vec3::y();
    // fall back to +X when the direction is (nearly) vertical
    let hint = if direction.normalize().cross(&up).norm() < 1e-6 {
        Vec3::x()
    } else {
        up
    };
    UnitQuaternion::face_towards(direction, &hint)
}
