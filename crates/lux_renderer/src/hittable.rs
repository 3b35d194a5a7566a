//! Hittable trait and Hit record for ray-object intersection.

use crate::{Material, Ray};
use lux_math::{Interval, Normal3, Vec3};

/// Record of a ray-object intersection.
///
/// A `Hit` is produced fresh by each query and borrows the material of the
/// surface that was struck.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// The ray that was tested, in the caller's coordinate space
    pub ray: Ray,
    /// Unit surface normal in the caller's coordinate space
    pub normal: Normal3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    /// Point of intersection.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.ray.at(self.t)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object at a parameter strictly inside `ray_t`.
    ///
    /// Returns the nearest such hit.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>>;
}

/// Reduce a sequence of candidates to the nearest hit.
///
/// Each candidate is queried with the interval narrowed to the nearest hit so
/// far. `Interval::surrounds` is exclusive, so on an exact tie the earlier
/// candidate is kept.
pub(crate) fn nearest_hit<'a, I, H>(candidates: I, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>>
where
    I: IntoIterator<Item = &'a H>,
    H: Hittable + 'a,
{
    let mut closest: Option<Hit<'a>> = None;

    for object in candidates {
        let interval = closest.map_or(ray_t, |hit| ray_t.with_max(hit.t));
        if let Some(hit) = object.hit(ray, interval) {
            closest = Some(hit);
        }
    }

    closest
}
