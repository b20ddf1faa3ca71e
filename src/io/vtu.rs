//! VTU (VTK Unstructured Grid) file writer

use crate::error::{MuscleGenError, Result};
use crate::generator::MuscleAsset;
use crate::mesh::bulge::blend_vertices;
use std::path::Path;
use vtkio::model::*;

/// Default VTK file format version (2.2 for broad compatibility)
pub const DEFAULT_VTK_VERSION: (u8, u8) = (2, 2);

/// Write a muscle asset to a VTU file
///
/// Points are the base vertices, or the blended positions when
/// `preview_weight` is given. Point data carries the bulge displacement
/// vectors; cell data flags tendon faces.
pub fn write_asset_vtu(
    asset: &MuscleAsset,
    output_path: &Path,
    preview_weight: Option<f64>,
    vtk_version: Option<(u8, u8)>,
) -> Result<()> {
    let version = vtk_version.unwrap_or(DEFAULT_VTK_VERSION);
    log::info!(
        "Writing muscle '{}' with {} faces to {:?} (VTK version {}.{})",
        asset.name,
        asset.base.num_faces(),
        output_path,
        version.0,
        version.1
    );

    let positions = match preview_weight {
        Some(weight) => blend_vertices(&asset.base.vertices, &asset.bulge.vertices, weight)?,
        None => asset.base.vertices.clone(),
    };

    let points: Vec<f64> = positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect();

    // Create cell connectivity for quad faces
    let mut connectivity = Vec::with_capacity(asset.base.num_faces() * 4);
    for face in &asset.base.faces {
        connectivity.extend_from_slice(&face.node_ids.map(|id| id as u64));
    }

    let cells = Cells {
        cell_verts: VertexNumbers::XML {
            connectivity,
            offsets: (0..asset.base.num_faces())
                .map(|i| ((i + 1) * 4) as u64)
                .collect(),
        },
        types: vec![CellType::Quad; asset.base.num_faces()],
    };

    let mut ugrid = UnstructuredGridPiece {
        points: IOBuffer::F64(points),
        cells,
        data: Attributes::new(),
    };

    let displacement: Vec<f64> = asset
        .bulge
        .displacements(&asset.base)
        .iter()
        .flat_map(|d| [d.x, d.y, d.z])
        .collect();

    ugrid.data.point.push(Attribute::DataArray(DataArray {
        name: "bulge_displacement".into(),
        elem: ElementType::Vectors,
        data: IOBuffer::F64(displacement),
    }));

    let tendon: Vec<i32> = (0..asset.base.num_faces())
        .map(|idx| i32::from(asset.is_tendon_face(idx)))
        .collect();

    ugrid.data.cell.push(Attribute::DataArray(DataArray {
        name: "tendon".into(),
        elem: ElementType::Scalars {
            num_comp: 1,
            lookup_table: None,
        },
        data: IOBuffer::I32(tendon),
    }));

    let vtk = Vtk {
        version: Version::new(version),
        title: format!("Muscle: {} ({})", asset.name, asset.response),
        byte_order: ByteOrder::LittleEndian,
        data: DataSet::UnstructuredGrid {
            pieces: vec![Piece::Inline(Box::new(ugrid))],
            meta: None,
        },
        file_path: None,
    };

    vtk.export(output_path)
        .map_err(|e| MuscleGenError::VtkError(format!("Failed to write VTU file: {}", e)))?;

    log::info!("Successfully wrote VTU file to {:?}", output_path);

    Ok(())
}
