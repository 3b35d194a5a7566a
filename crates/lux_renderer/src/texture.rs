//! Colour lookups for material diffuse terms.

use crate::{
    error::{SceneError, SceneResult},
    Color,
};
use lux_math::{Vec3, EPSILON};

/// A colour source evaluated at a world-space point.
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    /// The same colour everywhere.
    Solid(Color),
    /// Alternating 3D checker cells of edge length `scale`.
    Checker { even: Color, odd: Color, scale: f32 },
}

impl Texture {
    pub fn checker(even: Color, odd: Color, scale: f32) -> SceneResult<Self> {
        if scale.is_nan() || scale <= 0.0 || scale.is_infinite() {
            return Err(SceneError::InvalidCheckerScale(scale));
        }
        Ok(Self::Checker { even, odd, scale })
    }

    pub fn color_at(&self, p: Vec3) -> Color {
        match self {
            Texture::Solid(color) => *color,
            Texture::Checker { even, odd, scale } => {
                // Nudge so points lying exactly on a cell boundary (e.g. a
                // floor at y = 0) don't flicker between cells.
                let cell = (p / *scale + Vec3::splat(EPSILON)).floor();
                let parity = (cell.x + cell.y + cell.z) as i64;
                if parity.rem_euclid(2) == 0 {
                    *even
                } else {
                    *odd
                }
            }
        }
    }
}

impl From<Color> for Texture {
    fn from(color: Color) -> Self {
        Texture::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        let texture = Texture::from(Color::new(1.0, 0.5, 0.0));
        assert_eq!(texture.color_at(Vec3::new(9.0, -3.0, 2.0)), Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_checker_alternates() {
        let texture = Texture::checker(Color::ONE, Color::ZERO, 1.0).unwrap();

        assert_eq!(texture.color_at(Vec3::new(0.5, 0.0, 0.5)), Color::ONE);
        assert_eq!(texture.color_at(Vec3::new(1.5, 0.0, 0.5)), Color::ZERO);
        assert_eq!(texture.color_at(Vec3::new(-0.5, 0.0, 0.5)), Color::ZERO);
        assert_eq!(texture.color_at(Vec3::new(1.5, 0.0, 1.5)), Color::ONE);
    }

    #[test]
    fn test_checker_stable_on_boundary() {
        let texture = Texture::checker(Color::ONE, Color::ZERO, 1.0).unwrap();
        let above = texture.color_at(Vec3::new(0.5, 1e-7, 0.5));
        let below = texture.color_at(Vec3::new(0.5, -1e-7, 0.5));
        assert_eq!(above, below);
    }

    #[test]
    fn test_checker_rejects_bad_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Texture::checker(Color::ONE, Color::ZERO, scale),
                Err(SceneError::InvalidCheckerScale(_))
            ));
        }
    }
}
