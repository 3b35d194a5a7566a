//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Normal3, EPSILON};

/// The plane y = 0 in object space, facing +Y.
///
/// Place it in a scene by wrapping it in a [`Node`](crate::Node).
#[derive(Debug, Clone)]
pub struct Plane {
    material: Arc<Material>,
}

impl Plane {
    pub fn new(material: impl Into<Arc<Material>>) -> Self {
        Self {
            material: material.into(),
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let direction = ray.direction();
        let dy = direction.y;

        // Parallel test on the direction's angle, not its length, which
        // shrinks under a scaled Node
        if dy.abs() < EPSILON * direction.length() {
            return None;
        }

        let t = -ray.origin().y / dy;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Hit {
            t,
            ray: *ray,
            normal: Normal3::Y,
            material: &self.material,
        })
    }
}
