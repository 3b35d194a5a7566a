//! The scene: top-level geometry, lights and global lighting parameters.

use crate::{
    hittable::{nearest_hit, Hit, Hittable},
    Color, Geometry, Light, Ray,
};
use lux_math::{Interval, Vec3, EPSILON};

/// Index of refraction of air at 20 °C.
pub const REFRACTION_INDEX_AIR: f32 = 1.000_292;

/// Everything a tracer needs to resolve a ray.
///
/// Built once before rendering and only read afterwards, so it is shared
/// freely between render threads.
#[derive(Debug, Clone)]
pub struct World {
    geometries: Vec<Geometry>,
    lights: Vec<Light>,
    ambient: Color,
    background: Color,
    refraction_index: f32,
    epsilon: f32,
}

impl World {
    /// Create an empty world with the given ambient light and background.
    pub fn new(ambient: Color, background: Color) -> Self {
        Self {
            geometries: Vec::new(),
            lights: Vec::new(),
            ambient,
            background,
            refraction_index: 1.0,
            epsilon: EPSILON,
        }
    }

    /// Set the refraction index of the medium the scene sits in.
    pub fn with_refraction_index(mut self, refraction_index: f32) -> Self {
        self.refraction_index = refraction_index;
        self
    }

    /// Set the self-intersection threshold used for every query.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Add a top-level geometry.
    pub fn add(&mut self, geometry: impl Into<Geometry>) {
        self.geometries.push(geometry.into());
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn refraction_index(&self) -> f32 {
        self.refraction_index
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Number of top-level geometries.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Nearest hit beyond the world's epsilon.
    ///
    /// Every top-level geometry is tested in insertion order; on an exact tie
    /// the geometry added first wins.
    pub fn hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.hit_within(ray, Interval::beyond(self.epsilon))
    }

    /// Nearest hit with `t` strictly inside `ray_t`.
    pub fn hit_within(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        nearest_hit(&self.geometries, ray, ray_t)
    }

    /// Whether any geometry lies between `point` and `light`.
    ///
    /// Positional lights bound the shadow ray at their own distance, so
    /// geometry behind the light never occludes it.
    pub fn is_occluded(&self, point: Vec3, light: &Light) -> bool {
        let direction = light.direction_from(point);
        if direction == Vec3::ZERO {
            return false;
        }

        let shadow_ray = Ray::new(point, direction);
        let bound = Interval::new(self.epsilon, light.distance_from(point));
        self.hit_within(&shadow_ray, bound).is_some()
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        self.hit_within(ray, ray_t)
    }
}
