//! Scene construction errors.
//!
//! These are raised while a scene is being assembled, before any ray is
//! traced. Missing intersections are never errors; they are `None`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{0} must have a non-zero direction")]
    ZeroDirection(&'static str),

    #[error("Camera up vector must be non-zero and not parallel to the gaze direction")]
    DegenerateView,

    #[error("Field of view must be within (0, pi) radians, got {0}")]
    InvalidFieldOfView(f32),

    #[error("Orthographic scale must be positive, got {0}")]
    InvalidOrthoScale(f32),

    #[error("Spot light half-angle must be within (0, pi], got {0}")]
    InvalidConeAngle(f32),

    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("Box corners must span a positive extent on every axis")]
    DegenerateBox,

    #[error("Phong exponent must not be negative, got {0}")]
    InvalidExponent(i32),

    #[error("Checker scale must be positive, got {0}")]
    InvalidCheckerScale(f32),
}

pub type SceneResult<T> = Result<T, SceneError>;
