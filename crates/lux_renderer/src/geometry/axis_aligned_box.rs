//! Unit axis-aligned box assembled from six planes.

use std::f32::consts::PI;
use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Transform, Vec3};

use super::{Node, Plane};

/// Low bottom far corner; lies on the left, bottom and back faces.
const LBF: Vec3 = Vec3::new(-0.5, -0.5, -0.5);
/// Right upper near corner; lies on the right, top and front faces.
const RUN: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Object-space extent shared by all three axes.
const EXTENT: Interval = Interval {
    min: -0.5,
    max: 0.5,
};

/// Which two coordinates bound a face's rectangle.
#[derive(Debug, Clone, Copy)]
enum FaceAxes {
    YZ,
    XZ,
    XY,
}

impl FaceAxes {
    fn contains(self, p: Vec3) -> bool {
        match self {
            FaceAxes::YZ => EXTENT.contains(p.y) && EXTENT.contains(p.z),
            FaceAxes::XZ => EXTENT.contains(p.x) && EXTENT.contains(p.z),
            FaceAxes::XY => EXTENT.contains(p.x) && EXTENT.contains(p.y),
        }
    }
}

/// The box spanning [-0.5, 0.5] on every axis in object space.
///
/// Each face is a [`Plane`] node turned to face outward. A face only counts
/// where the hit lies inside its rectangle; the nearest surviving face wins
/// and, on an exact tie, the one enumerated first (right, left, top, bottom,
/// front, back).
#[derive(Debug, Clone)]
pub struct AxisAlignedBox {
    faces: [(Node, FaceAxes); 6],
}

impl AxisAlignedBox {
    pub fn new(material: impl Into<Arc<Material>>) -> Self {
        let material = material.into();
        let face = |transform: Transform, axes: FaceAxes| {
            (Node::new(Plane::new(Arc::clone(&material)), transform), axes)
        };
        let near = Transform::IDENTITY.translate(RUN);
        let far = Transform::IDENTITY.translate(LBF);

        Self {
            faces: [
                face(near.rotate_z(-PI / 2.0), FaceAxes::YZ),
                face(far.rotate_z(PI / 2.0), FaceAxes::YZ),
                face(near, FaceAxes::XZ),
                face(far.rotate_x(PI), FaceAxes::XZ),
                face(near.rotate_z(PI).rotate_x(PI / 2.0), FaceAxes::XY),
                face(far.rotate_z(PI).rotate_x(-PI / 2.0), FaceAxes::XY),
            ],
        }
    }
}

impl Hittable for AxisAlignedBox {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for (face, axes) in &self.faces {
            let interval = closest.map_or(ray_t, |hit| ray_t.with_max(hit.t));
            if let Some(hit) = face.hit(ray, interval) {
                if axes.contains(ray.at(hit.t)) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}
