//! Lux Renderer - recursive Whitted-style ray tracing.
//!
//! Primary rays from a [`Camera`] are intersected with the [`World`]; the
//! nearest surface's [`Material`] computes a colour from ambient light,
//! direct illumination by every visible [`Light`] and, for mirrors, a
//! recursively traced reflection bounded by the [`Tracer`] depth.
//!
//! Whole images are rendered in parallel buckets with [`render`].

mod bucket;
mod camera;
mod error;
mod geometry;
mod hittable;
mod light;
mod material;
mod renderer;
mod texture;
mod tracer;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, Projection};
pub use error::{SceneError, SceneResult};
pub use geometry::{AxisAlignedBox, Geometry, Group, Node, Plane, Sphere, Triangle, TriangleMesh};
pub use hittable::{Hit, Hittable};
pub use light::{DirectionalLight, Light, PointLight, SpotLight};
pub use material::{
    Color, LambertMaterial, Material, PhongMaterial, ReflectiveMaterial, SingleColorMaterial,
};
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig};
pub use texture::Texture;
pub use tracer::Tracer;
pub use world::{World, REFRACTION_INDEX_AIR};

/// Re-export math and mesh types used throughout the public API
pub use lux_core::{Mesh, MeshTriangle};
pub use lux_math::{Interval, Normal3, Ray, Transform, Vec3, EPSILON};
