//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Normal3};

/// The unit sphere centred on the object-space origin.
///
/// Position and radius come from the enclosing [`Node`](crate::Node);
/// non-uniform scales turn it into an ellipsoid.
#[derive(Debug, Clone)]
pub struct Sphere {
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(material: impl Into<Arc<Material>>) -> Self {
        Self {
            material: material.into(),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let oc = -ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - 1.0;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range. The far root covers
        // rays that start inside the sphere.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        Some(Hit {
            t: root,
            ray: *ray,
            normal: Normal3::new(ray.at(root)),
            material: &self.material,
        })
    }
}
