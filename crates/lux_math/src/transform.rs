// Affine transforms for placing unit primitives in a scene.
//
// A Transform carries its forward matrix, its inverse and the
// inverse-transpose of the linear part. All three are updated together by
// every composing operation and are never exposed for mutation.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::{Normal3, Ray};

/// An affine object-to-world transform with its precomputed inverse.
///
/// Builder methods compose on the right, so
/// `Transform::IDENTITY.translate(t).rotate_z(a)` rotates first and then
/// translates, matching the order the calls are read in a scene
/// description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
    inverse: Mat4,
    normal_matrix: Mat3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        matrix: Mat4::IDENTITY,
        inverse: Mat4::IDENTITY,
        normal_matrix: Mat3::IDENTITY,
    };

    /// Append a forward matrix and its known inverse.
    fn compose(&self, forward: Mat4, inverse: Mat4) -> Self {
        let matrix = self.matrix * forward;
        let inverse = inverse * self.inverse;
        let normal_matrix = Mat3::from_mat4(inverse).transpose();
        Self {
            matrix,
            inverse,
            normal_matrix,
        }
    }

    pub fn translate(&self, offset: Vec3) -> Self {
        self.compose(Mat4::from_translation(offset), Mat4::from_translation(-offset))
    }

    pub fn rotate_x(&self, angle: f32) -> Self {
        self.compose(Mat4::from_rotation_x(angle), Mat4::from_rotation_x(-angle))
    }

    pub fn rotate_y(&self, angle: f32) -> Self {
        self.compose(Mat4::from_rotation_y(angle), Mat4::from_rotation_y(-angle))
    }

    pub fn rotate_z(&self, angle: f32) -> Self {
        self.compose(Mat4::from_rotation_z(angle), Mat4::from_rotation_z(-angle))
    }

    /// Rotate by a quaternion. The quaternion is normalized first.
    pub fn rotate(&self, rotation: Quat) -> Self {
        let rotation = rotation.normalize();
        self.compose(Mat4::from_quat(rotation), Mat4::from_quat(rotation.inverse()))
    }

    /// Scale along the three axes.
    ///
    /// # Panics
    ///
    /// Panics if any factor is zero: the transform would have no inverse.
    pub fn scale(&self, factors: Vec3) -> Self {
        assert!(
            factors.x != 0.0 && factors.y != 0.0 && factors.z != 0.0,
            "scale factors must be non-zero, got {factors:?}"
        );
        self.compose(Mat4::from_scale(factors), Mat4::from_scale(factors.recip()))
    }

    /// Apply `other` after this transform's own operations (on the right).
    pub fn then(&self, other: &Transform) -> Self {
        self.compose(other.matrix, other.inverse)
    }

    /// Forward (object-to-world) matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Inverse (world-to-object) matrix.
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    pub fn point_to_world(&self, p: Vec3) -> Vec3 {
        self.matrix.transform_point3(p)
    }

    pub fn point_to_object(&self, p: Vec3) -> Vec3 {
        self.inverse.transform_point3(p)
    }

    /// Directions ignore translation (implicit w=0).
    pub fn vector_to_world(&self, v: Vec3) -> Vec3 {
        self.matrix.transform_vector3(v)
    }

    pub fn vector_to_object(&self, v: Vec3) -> Vec3 {
        self.inverse.transform_vector3(v)
    }

    /// Map an object-space normal to world space and renormalize.
    pub fn normal_to_world(&self, n: Normal3) -> Normal3 {
        Normal3::new(self.normal_matrix * n.vec3())
    }

    /// Map a world-space ray into object space.
    ///
    /// The direction is deliberately left unnormalized so a parameter `t`
    /// names the same point on both rays.
    pub fn ray_to_object(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.point_to_object(ray.origin),
            self.vector_to_object(ray.direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity() {
        let t = Transform::IDENTITY;
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.point_to_world(point), point);
        assert_eq!(t.point_to_object(point), point);
    }

    #[test]
    fn test_translate_point_and_vector() {
        let t = Transform::IDENTITY.translate(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(t.point_to_world(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(11.0, 22.0, 33.0));

        // Translation should NOT affect vectors (w=0)
        assert_eq!(t.vector_to_world(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_composition_order() {
        // Rotation is applied first, then translation.
        let t = Transform::IDENTITY
            .translate(Vec3::new(0.5, 0.5, 0.5))
            .rotate_z(-PI / 2.0);
        let normal = t.normal_to_world(Normal3::Y);
        assert!(approx(normal.vec3(), Vec3::X));
        assert!(approx(t.point_to_world(Vec3::ZERO), Vec3::splat(0.5)));
    }

    #[test]
    fn test_round_trip() {
        let t = Transform::IDENTITY
            .translate(Vec3::new(1.0, -2.0, 3.5))
            .rotate_y(PI / 5.0)
            .rotate_x(PI / 3.0)
            .scale(Vec3::new(2.0, 0.5, 3.0));

        let point = Vec3::new(5.0, 3.0, 2.0);
        assert!(approx(t.point_to_object(t.point_to_world(point)), point));
        assert!(approx(t.point_to_world(t.point_to_object(point)), point));

        let vector = Vec3::new(-1.0, 0.25, 4.0);
        assert!(approx(t.vector_to_object(t.vector_to_world(vector)), vector));
    }

    #[test]
    fn test_inverse_matches_forward() {
        let t = Transform::IDENTITY
            .rotate(Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.7))
            .scale(Vec3::new(1.5, 2.0, 0.25))
            .translate(Vec3::new(0.0, 4.0, 0.0));
        let product = t.matrix() * t.inverse();
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn test_normal_under_non_uniform_scale() {
        // A 45 degree slope squashed in y tilts its normal towards y.
        let t = Transform::IDENTITY.scale(Vec3::new(1.0, 0.5, 1.0));
        let n = Normal3::new(Vec3::new(1.0, 1.0, 0.0));
        let world = t.normal_to_world(n);

        assert!((world.vec3().length() - 1.0).abs() < 1e-5);

        // Still perpendicular to the transformed tangent.
        let tangent = t.vector_to_world(Vec3::new(1.0, -1.0, 0.0));
        assert!(world.dot(tangent).abs() < 1e-5);
    }

    #[test]
    fn test_ray_to_object_preserves_t() {
        let t = Transform::IDENTITY
            .translate(Vec3::new(0.0, 2.0, 0.0))
            .scale(Vec3::splat(4.0));
        let ray = Ray::new(Vec3::new(1.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let local = t.ray_to_object(&ray);

        for s in [0.0, 1.0, 3.5] {
            assert!(approx(t.point_to_world(local.at(s)), ray.at(s)));
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_scale_panics() {
        let _ = Transform::IDENTITY.scale(Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_then() {
        let a = Transform::IDENTITY.translate(Vec3::X);
        let b = Transform::IDENTITY.scale(Vec3::splat(2.0));
        let combined = a.then(&b);
        assert!(approx(combined.point_to_world(Vec3::Y), Vec3::new(1.0, 2.0, 0.0)));
    }
}
