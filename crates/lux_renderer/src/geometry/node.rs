//! Scene-graph nodes: a geometry placed by an affine transform.

use crate::{
    hittable::{Hit, Hittable},
    Ray,
};
use lux_math::{Interval, Transform};

use super::Geometry;

/// A geometry posed in its parent's space by a [`Transform`].
///
/// Incoming rays are mapped into object space with the inverse transform.
/// The object-space direction is left unnormalized, so the hit parameter `t`
/// is valid in both spaces unchanged; only the normal is mapped back, by the
/// inverse-transpose.
#[derive(Debug, Clone)]
pub struct Node {
    geometry: Box<Geometry>,
    transform: Transform,
}

impl Node {
    pub fn new(geometry: impl Into<Geometry>, transform: Transform) -> Self {
        Self {
            geometry: Box::new(geometry.into()),
            transform,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl Hittable for Node {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let local_ray = self.transform.ray_to_object(ray);
        let local_hit = self.geometry.hit(&local_ray, ray_t)?;

        Some(Hit {
            ray: *ray,
            normal: self.transform.normal_to_world(local_hit.normal),
            ..local_hit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Plane, Sphere};
    use lux_math::{Vec3, EPSILON};
    use std::f32::consts::PI;

    #[test]
    fn test_translated_sphere() {
        let node = Node::new(
            Sphere::new(Material::single_color(Color::ONE)),
            Transform::IDENTITY.translate(Vec3::new(5.0, 0.0, 0.0)),
        );

        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = node.hit(&ray, Interval::beyond(EPSILON)).unwrap();

        assert!((hit.t - 9.0).abs() < 1e-4);
        assert!((hit.point() - Vec3::new(5.0, 0.0, 1.0)).length() < 1e-4);
        assert_eq!(hit.ray, ray);
    }

    #[test]
    fn test_scaled_sphere_keeps_world_t() {
        let node = Node::new(
            Sphere::new(Material::single_color(Color::ONE)),
            Transform::IDENTITY.scale(Vec3::splat(2.0)),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = node.hit(&ray, Interval::beyond(EPSILON)).unwrap();

        assert!((hit.t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_ellipsoid_normal_is_corrected() {
        // Squash the unit sphere to half height.
        let node = Node::new(
            Sphere::new(Material::single_color(Color::ONE)),
            Transform::IDENTITY.scale(Vec3::new(1.0, 0.5, 1.0)),
        );

        // Surface point at object (1/sqrt2, 1/sqrt2, 0) lies at world
        // (1/sqrt2, 1/(2 sqrt2), 0).
        let s = std::f32::consts::FRAC_1_SQRT_2;
        let target = Vec3::new(s, 0.5 * s, 0.0);
        let origin = target + Vec3::new(3.0, 0.0, 0.0);
        let ray = Ray::new(origin, Vec3::new(-1.0, 0.0, 0.0));
        let hit = node.hit(&ray, Interval::beyond(EPSILON)).unwrap();

        // Gradient of x^2 + 4y^2 + z^2 = 1 at the hit point
        let expected = Vec3::new(target.x, 4.0 * target.y, 0.0).normalize();
        assert!((hit.normal.vec3() - expected).length() < 1e-3);
        assert!((hit.normal.vec3().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotated_plane_normal() {
        let node = Node::new(
            Plane::new(Material::single_color(Color::ONE)),
            Transform::IDENTITY.rotate_x(PI / 2.0),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = node.hit(&ray, Interval::beyond(EPSILON)).unwrap();

        assert!((hit.t - 3.0).abs() < 1e-4);
        assert!((hit.normal.vec3() - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_nested_nodes() {
        let inner = Node::new(
            Sphere::new(Material::single_color(Color::ONE)),
            Transform::IDENTITY.translate(Vec3::new(0.0, 2.0, 0.0)),
        );
        let outer = Node::new(inner, Transform::IDENTITY.translate(Vec3::new(3.0, 0.0, 0.0)));

        let ray = Ray::new(Vec3::new(3.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = outer.hit(&ray, Interval::beyond(EPSILON)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
    }
}
