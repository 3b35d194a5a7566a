use crate::Vec3;

/// Half-line `origin + t * direction`.
///
/// The direction keeps whatever length it was given. Mapping a ray through
/// an affine transform scales the direction along with the geometry, so a
/// hit parameter `t` found in object space is also valid in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(direction != Vec3::ZERO, "ray direction must be non-zero");
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point reached after travelling `t` direction-lengths.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
