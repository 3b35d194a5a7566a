use std::ops::Neg;

use crate::Vec3;

/// A unit-length surface normal.
///
/// Normals are kept apart from plain vectors because they transform by the
/// inverse-transpose of a transform's linear part, not by the transform
/// itself. Every constructor renormalizes, so a `Normal3` is always unit
/// length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normal3(Vec3);

impl Normal3 {
    pub const X: Normal3 = Normal3(Vec3::X);
    pub const Y: Normal3 = Normal3(Vec3::Y);
    pub const Z: Normal3 = Normal3(Vec3::Z);

    /// Create a normal pointing along `v`.
    ///
    /// `v` must be non-zero; use [`Normal3::try_new`] when that is not known.
    #[inline]
    pub fn new(v: Vec3) -> Self {
        debug_assert!(v.length_squared() > 0.0, "normal from zero-length vector");
        Self(v.normalize())
    }

    /// Create a normal pointing along `v`, or `None` if `v` has no direction.
    #[inline]
    pub fn try_new(v: Vec3) -> Option<Self> {
        v.try_normalize().map(Self)
    }

    /// The normal as a plain vector.
    #[inline]
    pub fn vec3(self) -> Vec3 {
        self.0
    }

    #[inline]
    pub fn dot(self, v: Vec3) -> f32 {
        self.0.dot(v)
    }
}

impl From<Normal3> for Vec3 {
    fn from(n: Normal3) -> Vec3 {
        n.0
    }
}

impl Neg for Normal3 {
    type Output = Normal3;

    fn neg(self) -> Normal3 {
        Normal3(-self.0)
    }
}
