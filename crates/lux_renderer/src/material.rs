//! Surface materials and their shading.
//!
//! Lit materials share one model: an ambient term, then for every light
//! that reaches the point a Lambert diffuse term and, where the material has
//! one, a Phong specular term. `ReflectiveMaterial` adds a mirror term traced
//! through the [`Tracer`] it is handed.

use crate::{
    error::{SceneError, SceneResult},
    hittable::Hit,
    Ray, Texture, Tracer, World,
};
use lux_math::{reflect, Vec3};

/// Color type alias (RGB values typically 0-1, unclamped)
pub type Color = Vec3;

/// A constant colour, unaffected by lights.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleColorMaterial {
    pub color: Color,
}

/// Diffuse-only surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertMaterial {
    pub texture: Texture,
}

/// Diffuse plus Phong highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    pub diffuse: Texture,
    pub specular: Color,
    pub exponent: i32,
}

/// Phong surface that also mirrors the scene, tinted by `reflection`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectiveMaterial {
    pub diffuse: Texture,
    pub specular: Color,
    pub exponent: i32,
    pub reflection: Color,
}

/// The closed set of materials a surface can carry.
///
/// Materials hold no per-render state and are shared between geometries
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    SingleColor(SingleColorMaterial),
    Lambert(LambertMaterial),
    Phong(PhongMaterial),
    Reflective(ReflectiveMaterial),
}

impl Material {
    pub fn single_color(color: Color) -> Self {
        Material::SingleColor(SingleColorMaterial { color })
    }

    pub fn lambert(texture: impl Into<Texture>) -> Self {
        Material::Lambert(LambertMaterial {
            texture: texture.into(),
        })
    }

    pub fn phong(
        diffuse: impl Into<Texture>,
        specular: Color,
        exponent: i32,
    ) -> SceneResult<Self> {
        check_exponent(exponent)?;
        Ok(Material::Phong(PhongMaterial {
            diffuse: diffuse.into(),
            specular,
            exponent,
        }))
    }

    pub fn reflective(
        diffuse: impl Into<Texture>,
        specular: Color,
        exponent: i32,
        reflection: Color,
    ) -> SceneResult<Self> {
        check_exponent(exponent)?;
        Ok(Material::Reflective(ReflectiveMaterial {
            diffuse: diffuse.into(),
            specular,
            exponent,
            reflection,
        }))
    }

    /// Colour seen along `hit.ray` at the hit point.
    ///
    /// `tracer` is only used by reflective surfaces, and already carries the
    /// reduced depth budget for the rays they spawn.
    pub fn color_for(&self, hit: &Hit<'_>, world: &World, tracer: &Tracer) -> Color {
        match self {
            Material::SingleColor(m) => m.color,
            Material::Lambert(m) => {
                let diffuse = m.texture.color_at(hit.point());
                shade(hit, world, diffuse, None)
            }
            Material::Phong(m) => {
                let diffuse = m.diffuse.color_at(hit.point());
                shade(hit, world, diffuse, Some((m.specular, m.exponent)))
            }
            Material::Reflective(m) => {
                let diffuse = m.diffuse.color_at(hit.point());
                let local = shade(hit, world, diffuse, Some((m.specular, m.exponent)));

                let mirrored = Ray::new(
                    hit.point(),
                    reflect(hit.ray.direction(), hit.normal.vec3()),
                );
                local + m.reflection * tracer.trace(&mirrored, world)
            }
        }
    }
}

// A negative power blows up to infinity where the highlight vanishes
fn check_exponent(exponent: i32) -> SceneResult<()> {
    if exponent < 0 {
        return Err(SceneError::InvalidExponent(exponent));
    }
    Ok(())
}

/// Ambient + per-light diffuse (+ optional specular) contribution.
fn shade(hit: &Hit<'_>, world: &World, diffuse: Color, specular: Option<(Color, i32)>) -> Color {
    let p = hit.point();
    let n = hit.normal.vec3();
    let e = (-hit.ray.direction()).normalize();

    let mut color = diffuse * world.ambient();

    for light in world.lights() {
        if !light.illuminates(p, world) {
            continue;
        }

        let l = light.direction_from(p);
        color += diffuse * light.color() * n.dot(l).max(0.0);

        if let Some((specular, exponent)) = specular {
            // l mirrored about n, pointing away from the surface
            let rl = reflect(-l, n);
            color += specular * light.color() * e.dot(rl).max(0.0).powi(exponent);
        }
    }

    color
}
