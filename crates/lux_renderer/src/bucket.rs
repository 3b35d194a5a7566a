//! Square image tiles traced as independent units of work.
//!
//! Tiles are ordered centre-first so that the interesting middle of a frame
//! finishes early. Each traced tile owns its pixel vector; assembling the
//! final image is a separate, single-threaded copy.

use crate::renderer::render_pixel;
use crate::{Camera, Color, RenderConfig, Tracer, World};

/// Edge length of a bucket when none is configured.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Pixel rectangle `[x, x + width) x [y, y + height)` of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Image coordinates covered by the bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |row| (self.x..self.x + self.width).map(move |column| (column, row)))
    }

    /// Squared distance from the bucket's midpoint to `(cx, cy)`.
    fn distance_sq(&self, cx: f32, cy: f32) -> f32 {
        let mx = self.x as f32 + self.width as f32 * 0.5;
        let my = self.y as f32 + self.height as f32 * 0.5;
        (mx - cx).powi(2) + (my - cy).powi(2)
    }
}

/// Cover a `width` x `height` image with buckets of `bucket_size` pixels,
/// nearest to the image centre first.
///
/// Buckets on the right and bottom edges are clipped to the image. Equally
/// distant buckets keep row-major order. A size of zero is treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y))
            })
        })
        .collect();

    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    buckets.sort_by(|a, b| a.distance_sq(cx, cy).total_cmp(&b.distance_sq(cx, cy)));
    buckets
}

/// Pixels of one traced bucket, row-major within the bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Color>,
}

/// Trace every pixel of `bucket`.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &World,
    tracer: &Tracer,
    config: &RenderConfig,
) -> BucketResult {
    let pixels = bucket
        .pixels()
        .map(|(x, y)| render_pixel(camera, world, tracer, x, y, config))
        .collect();

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}
