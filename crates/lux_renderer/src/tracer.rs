//! Recursive ray evaluation.

use crate::{Color, Ray, World};

/// Resolves a ray to a colour with a bounded recursion budget.
///
/// Reflective materials receive a tracer one level shallower than the one
/// that shaded them, so a chain of mirrors performs at most `depth` bounces
/// before seeing the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracer {
    depth: u32,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

impl Tracer {
    pub const DEFAULT_MAX_DEPTH: u32 = 4;

    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Remaining recursion budget.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Colour seen along `ray`.
    pub fn trace(&self, ray: &Ray, world: &World) -> Color {
        if self.depth == 0 {
            return world.background();
        }

        match world.hit(ray) {
            Some(hit) => {
                let next = Tracer::new(self.depth - 1);
                hit.material.color_for(&hit, world, &next)
            }
            None => world.background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, Material};
    use lux_math::Vec3;

    #[test]
    fn test_miss_returns_background() {
        let world = World::new(Color::ZERO, Color::new(0.1, 0.2, 0.3));
        let color = Tracer::default().trace(&Ray::new(Vec3::ZERO, Vec3::Z), &world);
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_hit_uses_material() {
        let mut world = World::new(Color::ZERO, Color::ZERO);
        world.add(Geometry::sphere_at(Vec3::new(0.0, 0.0, -3.0), 1.0, Material::single_color(Color::X)).unwrap());

        let color = Tracer::new(1).trace(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &world);
        assert_eq!(color, Color::X);
    }

    #[test]
    fn test_zero_depth_short_circuits() {
        let mut world = World::new(Color::ZERO, Color::Y);
        world.add(Geometry::sphere_at(Vec3::new(0.0, 0.0, -3.0), 1.0, Material::single_color(Color::X)).unwrap());

        let color = Tracer::new(0).trace(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &world);
        assert_eq!(color, Color::Y);
    }
}
