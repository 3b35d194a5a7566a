//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Normal3, Vec3};

/// Determinants below this are treated as a ray parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A single triangle with optional per-vertex normals.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Vec3; 3],
    normals: Option<[Vec3; 3]>,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a flat-shaded triangle from three vertices.
    ///
    /// Counter-clockwise vertices face the viewer.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: impl Into<Arc<Material>>) -> Self {
        Self {
            vertices: [a, b, c],
            normals: None,
            material: material.into(),
        }
    }

    /// Create a triangle whose normal is interpolated from its vertex normals.
    pub fn with_normals(
        vertices: [Vec3; 3],
        normals: [Vec3; 3],
        material: impl Into<Arc<Material>>,
    ) -> Self {
        Self {
            vertices,
            normals: Some(normals),
            material: material.into(),
        }
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let (t, normal) = intersect(ray, &self.vertices, self.normals.as_ref(), ray_t)?;
        Some(Hit {
            t,
            ray: *ray,
            normal,
            material: &self.material,
        })
    }
}

/// Solve for `(t, beta, gamma)` and return `t` with the shading normal.
///
/// A hit needs `t` inside `ray_t`, `beta >= 0`, `gamma >= 0` and
/// `beta + gamma <= 1`. Degenerate triangles never hit.
pub(crate) fn intersect(
    ray: &Ray,
    vertices: &[Vec3; 3],
    normals: Option<&[Vec3; 3]>,
    ray_t: Interval,
) -> Option<(f32, Normal3)> {
    let [a, b, c] = *vertices;
    let edge1 = b - a;
    let edge2 = c - a;

    let h = ray.direction().cross(edge2);
    let det = edge1.dot(h);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / det;
    let s = ray.origin() - a;
    let beta = f * s.dot(h);
    if !(0.0..=1.0).contains(&beta) {
        return None;
    }

    let q = s.cross(edge1);
    let gamma = f * ray.direction().dot(q);
    if gamma < 0.0 || beta + gamma > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if !ray_t.surrounds(t) {
        return None;
    }

    let face_normal = Normal3::try_new(edge1.cross(edge2))?;
    let normal = normals
        .and_then(|[na, nb, nc]| {
            Normal3::try_new(*na * (1.0 - beta - gamma) + *nb * beta + *nc * gamma)
        })
        .unwrap_or(face_normal);

    Some((t, normal))
}
