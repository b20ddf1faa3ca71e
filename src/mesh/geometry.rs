//! Geometric operations for muscle meshes

use crate::error::{MuscleGenError, Result};
use crate::mesh::types::{Point, QuadFace, Vec3};

/// Compute the normal vector of a quad face
/// Uses the cross product of diagonals, so quads collapsed to a triangle
/// at a pole still get a well-defined normal
pub fn compute_face_normal(face: &QuadFace, nodes: &[Point]) -> Result<Vec3> {
    let [n0, n1, n2, n3] = face_nodes(face, nodes)?;

    let v1 = n2 - n0; // diagonal 1
    let v2 = n3 - n1; // diagonal 2

    let normal = v1.cross(&v2);

    let norm = normal.norm();
    if norm < 1e-12 {
        return Err(MuscleGenError::invalid(
            "face",
            format!("{:?}", face.node_ids),
            "degenerate face (zero normal)",
        ));
    }

    Ok(normal / norm)
}

/// Compute the centroid of a quad face
pub fn compute_face_centroid(face: &QuadFace, nodes: &[Point]) -> Result<Point> {
    let [n0, n1, n2, n3] = face_nodes(face, nodes)?;

    let centroid = (n0.coords + n1.coords + n2.coords + n3.coords) / 4.0;

    Ok(Point::from(centroid))
}

/// Compute the area of a quad face
/// Uses the cross product of diagonals divided by 2
pub fn compute_face_area(face: &QuadFace, nodes: &[Point]) -> Result<f64> {
    let [n0, n1, n2, n3] = face_nodes(face, nodes)?;

    let d1 = n2 - n0;
    let d2 = n3 - n1;

    Ok(d1.cross(&d2).norm() / 2.0)
}

/// Distance of a vertex from the local longitudinal (z) axis
pub fn radial_distance(point: &Point) -> f64 {
    point.x.hypot(point.y)
}

/// Total surface area of a quad mesh
pub fn surface_area(faces: &[QuadFace], nodes: &[Point]) -> Result<f64> {
    faces
        .iter()
        .map(|face| compute_face_area(face, nodes))
        .sum()
}

/// Signed enclosed volume of a closed quad mesh
///
/// Each quad is split into triangles (0, 1, 2) and (0, 2, 3) and the signed
/// tetrahedron volumes against the origin are summed. Positive for outward
/// winding.
pub fn signed_volume(faces: &[QuadFace], nodes: &[Point]) -> Result<f64> {
    let mut volume = 0.0;

    for face in faces {
        let [n0, n1, n2, n3] = face_nodes(face, nodes)?;
        volume += n0.coords.dot(&n1.coords.cross(&n2.coords));
        volume += n0.coords.dot(&n2.coords.cross(&n3.coords));
    }

    Ok(volume / 6.0)
}

fn face_nodes<'a>(face: &QuadFace, nodes: &'a [Point]) -> Result<[&'a Point; 4]> {
    Ok([
        get_node(nodes, face.node_ids[0])?,
        get_node(nodes, face.node_ids[1])?,
        get_node(nodes, face.node_ids[2])?,
        get_node(nodes, face.node_ids[3])?,
    ])
}

/// Helper to safely get a node from the node array
fn get_node(nodes: &[Point], index: usize) -> Result<&Point> {
    nodes.get(index).ok_or_else(|| {
        MuscleGenError::invalid(
            "vertex_index",
            index,
            format!("out of bounds for {} vertices", nodes.len()),
        )
    })
}
