//! Triangle meshes built from pre-parsed triangle lists.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material, Ray,
};
use lux_core::{Mesh, MeshTriangle};
use lux_math::Interval;

use super::triangle;

/// A set of triangles sharing one material.
///
/// Traversal is a linear scan over all faces.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    faces: Vec<MeshTriangle>,
    material: Arc<Material>,
}

impl TriangleMesh {
    /// Create a mesh from already resolved triangles.
    pub fn new(faces: Vec<MeshTriangle>, material: impl Into<Arc<Material>>) -> Self {
        log::debug!("Created TriangleMesh: {} faces", faces.len());
        Self {
            faces,
            material: material.into(),
        }
    }

    /// Create a mesh from an indexed [`Mesh`].
    ///
    /// Faces with out-of-range indices or zero area are dropped with a
    /// warning; neither can ever be hit.
    pub fn from_mesh(mesh: &Mesh, material: impl Into<Arc<Material>>) -> Self {
        let resolved: Vec<MeshTriangle> = mesh.triangles().collect();
        let out_of_range = mesh.triangle_count() - resolved.len();
        if out_of_range > 0 {
            log::warn!("Skipped {out_of_range} mesh faces with out-of-range indices");
        }

        let (faces, degenerate): (Vec<_>, Vec<_>) =
            resolved.into_iter().partition(|face| !is_degenerate(face));
        if !degenerate.is_empty() {
            log::warn!("Skipped {} degenerate mesh faces", degenerate.len());
        }

        Self::new(faces, material)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest = None;
        let mut interval = ray_t;

        for face in &self.faces {
            if let Some((t, normal)) =
                triangle::intersect(ray, &face.positions, face.normals.as_ref(), interval)
            {
                interval = interval.with_max(t);
                closest = Some((t, normal));
            }
        }

        closest.map(|(t, normal)| Hit {
            t,
            ray: *ray,
            normal,
            material: &self.material,
        })
    }
}

fn is_degenerate(face: &MeshTriangle) -> bool {
    let [a, b, c] = face.positions;
    (b - a).cross(c - a).try_normalize().is_none()
}
