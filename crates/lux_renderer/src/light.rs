//! Light sources.
//!
//! Every light answers two questions for a surface point: which way the
//! light lies (`direction_from`) and whether it actually reaches the point
//! (`illuminates`). The latter casts a shadow ray into the [`World`] unless
//! shadows are switched off for that light.

use crate::{
    error::{SceneError, SceneResult},
    Color, World,
};
use lux_math::Vec3;

/// Light emitted from a single point in all directions.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub position: Vec3,
    pub casts_shadows: bool,
}

/// Parallel light arriving from infinitely far away (sunlight).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    /// Unit direction the light travels in
    pub direction: Vec3,
    pub casts_shadows: bool,
}

/// Point light restricted to a cone.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    pub position: Vec3,
    /// Unit direction of the cone axis
    pub direction: Vec3,
    /// Half-angle of the cone in radians
    pub half_angle: f32,
    pub casts_shadows: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
    Spot(SpotLight),
}

impl Light {
    /// A shadow-casting point light.
    pub fn point(color: Color, position: Vec3) -> Self {
        Light::Point(PointLight {
            color,
            position,
            casts_shadows: true,
        })
    }

    /// A shadow-casting directional light travelling along `direction`.
    pub fn directional(color: Color, direction: Vec3) -> SceneResult<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(SceneError::ZeroDirection("Directional light"))?;
        Ok(Light::Directional(DirectionalLight {
            color,
            direction,
            casts_shadows: true,
        }))
    }

    /// A shadow-casting spot light at `position` aimed along `direction`.
    pub fn spot(color: Color, position: Vec3, direction: Vec3, half_angle: f32) -> SceneResult<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(SceneError::ZeroDirection("Spot light"))?;
        if half_angle.is_nan() || half_angle <= 0.0 || half_angle > std::f32::consts::PI {
            return Err(SceneError::InvalidConeAngle(half_angle));
        }
        Ok(Light::Spot(SpotLight {
            color,
            position,
            direction,
            half_angle,
            casts_shadows: true,
        }))
    }

    /// Switch shadow testing on or off for this light.
    pub fn with_shadows(mut self, casts_shadows: bool) -> Self {
        match &mut self {
            Light::Point(l) => l.casts_shadows = casts_shadows,
            Light::Directional(l) => l.casts_shadows = casts_shadows,
            Light::Spot(l) => l.casts_shadows = casts_shadows,
        }
        self
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(l) => l.color,
            Light::Directional(l) => l.color,
            Light::Spot(l) => l.color,
        }
    }

    pub fn casts_shadows(&self) -> bool {
        match self {
            Light::Point(l) => l.casts_shadows,
            Light::Directional(l) => l.casts_shadows,
            Light::Spot(l) => l.casts_shadows,
        }
    }

    /// Unit vector from `p` towards the light.
    ///
    /// Zero when `p` coincides with a positional light.
    pub fn direction_from(&self, p: Vec3) -> Vec3 {
        match self {
            Light::Point(PointLight { position, .. }) | Light::Spot(SpotLight { position, .. }) => {
                (*position - p).normalize_or_zero()
            }
            Light::Directional(l) => -l.direction,
        }
    }

    /// Distance from `p` to the light along `direction_from(p)`.
    pub fn distance_from(&self, p: Vec3) -> f32 {
        match self {
            Light::Point(PointLight { position, .. }) | Light::Spot(SpotLight { position, .. }) => {
                position.distance(p)
            }
            Light::Directional(_) => f32::INFINITY,
        }
    }

    /// Whether light reaches `p`: inside the cone for spot lights, and not
    /// blocked by any geometry when the light casts shadows.
    pub fn illuminates(&self, p: Vec3, world: &World) -> bool {
        if let Light::Spot(spot) = self {
            if !spot.covers(p) {
                return false;
            }
        }
        !self.casts_shadows() || !world.is_occluded(p, self)
    }
}

impl SpotLight {
    /// Whether `p` lies within the cone.
    fn covers(&self, p: Vec3) -> bool {
        match (p - self.position).try_normalize() {
            Some(to_point) => {
                let cos_angle = self.direction.dot(to_point).clamp(-1.0, 1.0);
                cos_angle.acos() <= self.half_angle
            }
            // At the apex itself
            None => true,
        }
    }
}
