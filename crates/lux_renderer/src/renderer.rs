//! Whole-image rendering.
//!
//! Every pixel is traced independently against a read-only world, so the
//! image is rendered as parallel buckets and assembled afterwards. Colours
//! stay unclamped until `color_to_rgba`.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Tracer, World};

/// Image size and tracing limits for [`render`].
///
/// Missing fields fall back to [`RenderConfig::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum recursion depth for reflected rays
    pub max_depth: u32,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: Tracer::DEFAULT_MAX_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Opaque 8-bit pixel; channels are clamped to [0, 1] first, no gamma.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let [r, g, b] = color
        .clamp(Color::ZERO, Color::ONE)
        .to_array()
        .map(|c| (c * 255.0).round() as u8);
    [r, g, b, u8::MAX]
}

/// Colour of the pixel at column `x`, row `y`.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    tracer: &Tracer,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.ray_for(x, y, config.width, config.height);
    tracer.trace(&ray, world)
}

/// Linear, unclamped colours in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// An all-black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, line) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + line.len()].copy_from_slice(line);
        }
    }

    /// Packed RGBA8 bytes, as expected by PNG encoders.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&color| color_to_rgba(color))
            .collect()
    }
}

/// Trace the whole image.
///
/// Buckets are traced in parallel on the rayon thread pool; the result is
/// identical to calling [`render_pixel`] for every pixel in turn.
pub fn render(world: &World, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    let tracer = Tracer::new(config.max_depth);

    log::info!(
        "Rendering {}x{}, max depth {}, {} buckets, {} geometries, {} lights",
        config.width,
        config.height,
        config.max_depth,
        buckets.len(),
        world.len(),
        world.lights().len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, world, &tracer, config))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, Material};
    use lux_math::Vec3;
    use std::f32::consts::PI;

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 0.5)), [255, 0, 128, 255]);
    }

    #[test]
    fn test_write_bucket() {
        let mut image = ImageBuffer::new(4, 3);
        image.write_bucket(&BucketResult {
            bucket: crate::Bucket::new(1, 1, 2, 2),
            pixels: vec![Color::X, Color::Y, Color::Z, Color::ONE],
        });

        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.get(1, 1), Color::X);
        assert_eq!(image.get(2, 1), Color::Y);
        assert_eq!(image.get(1, 2), Color::Z);
        assert_eq!(image.get(2, 2), Color::ONE);
        assert_eq!(image.get(3, 2), Color::ZERO);
    }

    #[test]
    fn test_render_matches_pixelwise() {
        let mut world = World::new(Color::ZERO, Color::new(0.0, 0.0, 1.0));
        world.add(Geometry::sphere_at(Vec3::ZERO, 1.0, Material::single_color(Color::X)).unwrap());
        let camera = Camera::perspective(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::Y, PI / 4.0).unwrap();
        let config = RenderConfig {
            width: 21,
            height: 15,
            max_depth: 2,
            bucket_size: 4,
        };

        let image = render(&world, &camera, &config);
        let tracer = Tracer::new(config.max_depth);

        assert_eq!(image.pixels.len(), 21 * 15);
        for y in 0..config.height {
            for x in 0..config.width {
                assert_eq!(image.get(x, y), render_pixel(&camera, &world, &tracer, x, y, &config));
            }
        }

        // Centre sees the sphere, corner sees the background
        assert_eq!(image.get(10, 7), Color::X);
        assert_eq!(image.get(0, 0), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{ "width": 32 }"#).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 480);
        assert_eq!(config.max_depth, Tracer::DEFAULT_MAX_DEPTH);
    }
}
