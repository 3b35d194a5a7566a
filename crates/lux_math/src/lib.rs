// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod normal;
mod ray;
mod transform;

pub use interval::Interval;
pub use normal::Normal3;
pub use ray::Ray;
pub use transform::Transform;

/// Smallest ray parameter accepted as a real intersection.
///
/// Hits at or below this distance are treated as self-intersections of the
/// surface a ray was spawned from.
pub const EPSILON: f32 = 1e-4;

/// Reflect `v` about the unit normal `n`.
///
/// Returns: v - 2 (v·n) n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
