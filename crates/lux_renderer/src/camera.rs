//! Cameras for primary ray generation.

use crate::{
    error::{SceneError, SceneResult},
    Ray,
};
use lux_math::Vec3;

/// How image-plane positions map to rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Rays fan out from the eye; `fov` is the vertical opening angle in radians.
    Perspective { fov: f32 },
    /// Parallel rays; `scale` is the vertical extent of the view in world units.
    Orthographic { scale: f32 },
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    // Orthonormal basis: u right, v up, w pointing back from the gaze
    u: Vec3,
    v: Vec3,
    w: Vec3,
    projection: Projection,
}

impl Camera {
    /// A pinhole camera at `eye` looking along `gaze`.
    pub fn perspective(eye: Vec3, gaze: Vec3, up: Vec3, fov: f32) -> SceneResult<Self> {
        if fov.is_nan() || fov <= 0.0 || fov >= std::f32::consts::PI {
            return Err(SceneError::InvalidFieldOfView(fov));
        }
        Self::with_projection(eye, gaze, up, Projection::Perspective { fov })
    }

    /// A parallel-projection camera at `eye` looking along `gaze`.
    pub fn orthographic(eye: Vec3, gaze: Vec3, up: Vec3, scale: f32) -> SceneResult<Self> {
        if scale.is_nan() || scale <= 0.0 {
            return Err(SceneError::InvalidOrthoScale(scale));
        }
        Self::with_projection(eye, gaze, up, Projection::Orthographic { scale })
    }

    fn with_projection(eye: Vec3, gaze: Vec3, up: Vec3, projection: Projection) -> SceneResult<Self> {
        let w = -gaze
            .try_normalize()
            .ok_or(SceneError::ZeroDirection("Camera gaze"))?;
        let u = up.cross(w).try_normalize().ok_or(SceneError::DegenerateView)?;
        let v = w.cross(u);

        Ok(Self {
            eye,
            u,
            v,
            w,
            projection,
        })
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Primary ray through the centre of pixel (`column`, `row`).
    ///
    /// Row 0 is the top of the image.
    pub fn ray_for(&self, column: u32, row: u32, width: u32, height: u32) -> Ray {
        let width_f = width as f32;
        let height_f = height as f32;
        // Offsets from the image centre, in pixels, y pointing up
        let x = column as f32 - (width_f - 1.0) / 2.0;
        let y = (height_f - 1.0) / 2.0 - row as f32;

        match self.projection {
            Projection::Perspective { fov } => {
                let distance = (height_f / 2.0) / (fov / 2.0).tan();
                let direction = -self.w * distance + self.u * x + self.v * y;
                Ray::new(self.eye, direction.normalize())
            }
            Projection::Orthographic { scale } => {
                let pixel = scale / height_f;
                let origin = self.eye + self.u * (x * pixel) + self.v * (y * pixel);
                Ray::new(origin, -self.w)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_center_ray_follows_gaze() {
        let camera = Camera::perspective(Vec3::new(4.0, 4.0, 4.0), Vec3::splat(-1.0), Vec3::Y, PI / 4.0)
            .unwrap();

        // Odd resolution: the middle pixel is exactly on axis.
        let ray = camera.ray_for(50, 50, 101, 101);
        assert_eq!(ray.origin, Vec3::new(4.0, 4.0, 4.0));
        assert!((ray.direction - Vec3::splat(-1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_perspective_field_of_view() {
        let camera = Camera::perspective(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, PI / 2.0).unwrap();

        // Top edge of a 2-pixel-high image at 90 degrees: half a pixel from
        // the centre over a focal distance of one pixel.
        let top = camera.ray_for(0, 0, 1, 2);
        let expected = Vec3::new(0.0, 0.5, -1.0).normalize();
        assert!((top.direction - expected).length() < 1e-5);
    }

    #[test]
    fn test_rows_go_down_columns_go_right() {
        let camera = Camera::perspective(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, PI / 4.0).unwrap();
        let top_left = camera.ray_for(0, 0, 64, 48);
        let bottom_right = camera.ray_for(63, 47, 64, 48);

        assert!(top_left.direction.x < 0.0 && top_left.direction.y > 0.0);
        assert!(bottom_right.direction.x > 0.0 && bottom_right.direction.y < 0.0);
    }

    #[test]
    fn test_orthographic_rays_are_parallel() {
        let camera = Camera::orthographic(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::Y, 4.0).unwrap();

        let a = camera.ray_for(0, 0, 100, 100);
        let b = camera.ray_for(99, 99, 100, 100);
        assert_eq!(a.direction, Vec3::NEG_Z);
        assert_eq!(b.direction, Vec3::NEG_Z);

        // Pixel centres span just under the 4 unit view height
        assert!((a.origin.y - 1.98).abs() < 1e-4);
        assert!((b.origin.y + 1.98).abs() < 1e-4);
        assert!((a.origin.x + 1.98).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_cameras() {
        assert_eq!(
            Camera::perspective(Vec3::ZERO, Vec3::ZERO, Vec3::Y, 1.0).unwrap_err(),
            SceneError::ZeroDirection("Camera gaze")
        );
        assert_eq!(
            Camera::perspective(Vec3::ZERO, Vec3::Y, Vec3::Y, 1.0).unwrap_err(),
            SceneError::DegenerateView
        );
        assert_eq!(
            Camera::perspective(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 0.0).unwrap_err(),
            SceneError::InvalidFieldOfView(0.0)
        );
        assert_eq!(
            Camera::orthographic(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, -1.0).unwrap_err(),
            SceneError::InvalidOrthoScale(-1.0)
        );
    }
}
