//! Wavefront OBJ import.
//!
//! Parsing is delegated to `tobj`; this module only triangulates, merges all
//! models of a file into one `Mesh` and reports what it found. Material
//! libraries referenced by the file are ignored: surface appearance is
//! assigned when the mesh is placed in a scene.

use std::io::BufReader;
use std::path::Path;

use lux_math::Vec3;
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur during mesh loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in OBJ data")]
    NoGeometry,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load an OBJ file into a single mesh.
pub fn load_obj(path: impl AsRef<Path>) -> LoadResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ: {}", path.display());

    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    merge_models(&models)
}

/// Load OBJ data held in memory into a single mesh.
pub fn load_obj_from_str(source: &str) -> LoadResult<Mesh> {
    let mut reader = BufReader::new(source.as_bytes());
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;
    merge_models(&models)
}

fn merge_models(models: &[tobj::Model]) -> LoadResult<Mesh> {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();
    let mut all_have_normals = true;

    for model in models {
        let mesh = &model.mesh;
        let base = positions.len() as u32;
        let vertex_count = mesh.positions.len() / 3;

        positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        );

        if mesh.normals.len() == mesh.positions.len() {
            normals.extend(
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2])),
            );
        } else {
            all_have_normals = false;
        }

        indices.extend(mesh.indices.iter().map(|i| base + i));

        log::debug!(
            "OBJ model '{}': {} vertices, {} triangles",
            model.name,
            vertex_count,
            mesh.indices.len() / 3
        );
    }

    if indices.is_empty() {
        return Err(LoadError::NoGeometry);
    }

    let mut mesh = Mesh::new(positions, indices, None);
    if all_have_normals {
        mesh.normals = Some(normals);
    } else {
        mesh.compute_normals();
    }

    log::info!(
        "Loaded OBJ mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
