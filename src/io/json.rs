//! JSON muscle asset format
//!
//! A self-contained interchange file a host importer can read: base vertices,
//! quad faces, the index-aligned bulge vertices, tendon faces and the driver
//! expression for the chosen response kind.

use crate::error::{MuscleGenError, Result};
use crate::generator::MuscleAsset;
use crate::mesh::{BaseMesh, BulgeTarget, MeshProfile, Point, QuadFace};
use crate::response::ResponseKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct JsonAsset {
    name: String,
    generated_at: String,
    profile: MeshProfile,
    vertices: Vec<[f64; 3]>,
    faces: Vec<[usize; 4]>,
    bulge: JsonBulge,
    #[serde(default)]
    tendon_faces: Vec<usize>,
    response: ResponseKind,
    driver_expression: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonBulge {
    bulge_factor: f64,
    falloff_exponent: f64,
    vertices: Vec<[f64; 3]>,
}

fn to_points(coords: Vec<[f64; 3]>) -> Vec<Point> {
    coords.into_iter().map(|[x, y, z]| Point::new(x, y, z)).collect()
}

fn to_coords(points: &[Point]) -> Vec<[f64; 3]> {
    points.iter().map(|p| [p.x, p.y, p.z]).collect()
}

pub fn read_json_asset<P: AsRef<Path>>(path: P) -> Result<MuscleAsset> {
    let file = File::open(path.as_ref())?;

    let reader = BufReader::new(file);
    let json: JsonAsset = serde_json::from_reader(reader).map_err(|e| {
        MuscleGenError::ConfigError(format!("Failed to parse JSON asset: {}", e))
    })?;

    json.profile.validate()?;

    let vertices = to_points(json.vertices);
    let bulge_vertices = to_points(json.bulge.vertices);
    if vertices.len() != json.profile.expected_vertices() {
        return Err(MuscleGenError::ConfigError(format!(
            "Asset has {} vertices, profile expects {}",
            vertices.len(),
            json.profile.expected_vertices()
        )));
    }
    if bulge_vertices.len() != vertices.len() {
        return Err(MuscleGenError::ConfigError(format!(
            "Bulge target has {} vertices, base mesh has {}",
            bulge_vertices.len(),
            vertices.len()
        )));
    }
    if json.faces.len() != json.profile.expected_faces() {
        return Err(MuscleGenError::ConfigError(format!(
            "Asset has {} faces, profile expects {}",
            json.faces.len(),
            json.profile.expected_faces()
        )));
    }
    if let Some(bad) = json.faces.iter().flatten().find(|&&id| id >= vertices.len()) {
        return Err(MuscleGenError::ConfigError(format!(
            "Face references vertex {} but asset has {} vertices",
            bad,
            vertices.len()
        )));
    }

    if let Some(bad) = json.tendon_faces.iter().find(|&&id| id >= json.faces.len()) {
        return Err(MuscleGenError::ConfigError(format!(
            "Tendon face {} out of range for {} faces",
            bad,
            json.faces.len()
        )));
    }

    let mut tendon_faces = json.tendon_faces;
    tendon_faces.sort_unstable();
    tendon_faces.dedup();

    Ok(MuscleAsset {
        name: json.name,
        base: BaseMesh {
            profile: json.profile,
            vertices,
            faces: json.faces.into_iter().map(QuadFace::new).collect(),
        },
        bulge: BulgeTarget {
            bulge_factor: json.bulge.bulge_factor,
            falloff_exponent: json.bulge.falloff_exponent,
            vertices: bulge_vertices,
        },
        tendon_faces,
        response: json.response,
    })
}

pub fn write_json_asset<P: AsRef<Path>>(asset: &MuscleAsset, path: P) -> Result<()> {
    let json = JsonAsset {
        name: asset.name.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        profile: asset.base.profile,
        vertices: to_coords(&asset.base.vertices),
        faces: asset.base.faces.iter().map(|f| f.node_ids).collect(),
        bulge: JsonBulge {
            bulge_factor: asset.bulge.bulge_factor,
            falloff_exponent: asset.bulge.falloff_exponent,
            vertices: to_coords(&asset.bulge.vertices),
        },
        tendon_faces: asset.tendon_faces.clone(),
        response: asset.response,
        driver_expression: asset.response.expression().to_string(),
    };

    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &json).map_err(|e| {
        MuscleGenError::ConfigError(format!("Failed to write JSON asset: {}", e))
    })?;

    log::info!("Wrote muscle asset '{}' to {:?}", asset.name, path.as_ref());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_muscle, MuscleSpec};
    use crate::preset::find_preset;

    fn biceps() -> MuscleAsset {
        let mut spec = MuscleSpec::from_preset(&find_preset("Biceps").unwrap(), 1.0).unwrap();
        spec.profile.radial_segments = 8;
        spec.profile.longitudinal_rings = 6;
        generate_muscle(&spec).unwrap()
    }

    #[test]
    fn test_json_asset_contents() {
        let asset = biceps();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biceps.json");

        write_json_asset(&asset, &path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(value["response"], "FLEXOR");
        assert_eq!(value["driver_expression"], "max(a,0)");
        assert_eq!(value["vertices"].as_array().unwrap().len(), 56);
        assert_eq!(value["bulge"]["vertices"].as_array().unwrap().len(), 56);

        let loaded = read_json_asset(&path).unwrap();
        assert_eq!(loaded.base.num_faces(), asset.base.num_faces());
        assert_eq!(loaded.tendon_faces, asset.tendon_faces);
    }

    /// Write the biceps asset, apply `edit` to its JSON and read it back
    fn read_edited(edit: impl FnOnce(&mut serde_json::Value)) -> Result<MuscleAsset> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        write_json_asset(&biceps(), &path).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        edit(&mut value);
        std::fs::write(&path, value.to_string()).unwrap();

        read_json_asset(&path)
    }

    #[test]
    fn test_misaligned_bulge_rejected() {
        let result = read_edited(|value| {
            value["bulge"]["vertices"].as_array_mut().unwrap().pop();
        });
        assert!(matches!(result, Err(MuscleGenError::ConfigError(_))));
    }

    #[test]
    fn test_missing_face_rejected() {
        let result = read_edited(|value| {
            value["faces"].as_array_mut().unwrap().pop();
        });
        match result {
            Err(MuscleGenError::ConfigError(msg)) => assert!(msg.contains("faces")),
            other => panic!("unexpected result {:?}", other.map(|a| a.name)),
        }
    }

    #[test]
    fn test_tendon_face_out_of_range_rejected() {
        // 8 segments x 6 rings = 48 faces
        let result = read_edited(|value| {
            value["tendon_faces"]
                .as_array_mut()
                .unwrap()
                .push(serde_json::json!(48));
        });
        match result {
            Err(MuscleGenError::ConfigError(msg)) => assert!(msg.contains("Tendon face 48")),
            other => panic!("unexpected result {:?}", other.map(|a| a.name)),
        }
    }
}
