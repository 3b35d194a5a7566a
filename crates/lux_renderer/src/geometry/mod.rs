//! Geometry primitives and scene-graph composition.
//!
//! Every primitive is defined once, unit-sized, in its own object space:
//!
//! - [`Plane`]: y = 0 facing +Y
//! - [`Sphere`]: radius 1 around the origin
//! - [`AxisAlignedBox`]: [-0.5, 0.5] on every axis
//! - [`Triangle`] / [`TriangleMesh`]: given directly in their parent space
//!
//! [`Node`] places any geometry with an affine transform, and [`Group`]
//! collects several into one. [`Geometry`] is the closed set of all of
//! these, dispatched by `match`.

mod axis_aligned_box;
mod mesh;
mod node;
mod plane;
mod sphere;
mod triangle;

use std::sync::Arc;

pub use axis_aligned_box::AxisAlignedBox;
pub use mesh::TriangleMesh;
pub use node::Node;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{
    error::{SceneError, SceneResult},
    hittable::{nearest_hit, Hit, Hittable},
    Material, Ray,
};
use lux_math::{Interval, Quat, Transform, Vec3};

/// Any intersectable element of a scene.
#[derive(Debug, Clone)]
pub enum Geometry {
    Plane(Plane),
    Sphere(Sphere),
    AxisAlignedBox(AxisAlignedBox),
    Triangle(Triangle),
    Mesh(TriangleMesh),
    Node(Node),
    Group(Group),
}

impl Hittable for Geometry {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        match self {
            Geometry::Plane(plane) => plane.hit(ray, ray_t),
            Geometry::Sphere(sphere) => sphere.hit(ray, ray_t),
            Geometry::AxisAlignedBox(aab) => aab.hit(ray, ray_t),
            Geometry::Triangle(triangle) => triangle.hit(ray, ray_t),
            Geometry::Mesh(mesh) => mesh.hit(ray, ray_t),
            Geometry::Node(node) => node.hit(ray, ray_t),
            Geometry::Group(group) => group.hit(ray, ray_t),
        }
    }
}

impl Geometry {
    /// A plane through `point` facing along `normal`.
    pub fn plane_through(
        point: Vec3,
        normal: Vec3,
        material: impl Into<Arc<Material>>,
    ) -> SceneResult<Geometry> {
        let normal = normal
            .try_normalize()
            .ok_or(SceneError::ZeroDirection("Plane normal"))?;
        let transform = Transform::IDENTITY
            .translate(point)
            .rotate(Quat::from_rotation_arc(Vec3::Y, normal));
        Ok(Node::new(Plane::new(material), transform).into())
    }

    /// A sphere with the given world-space centre and radius.
    pub fn sphere_at(
        center: Vec3,
        radius: f32,
        material: impl Into<Arc<Material>>,
    ) -> SceneResult<Geometry> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        let transform = Transform::IDENTITY
            .translate(center)
            .scale(Vec3::splat(radius));
        Ok(Node::new(Sphere::new(material), transform).into())
    }

    /// A box spanning the low-bottom-far corner `lbf` to the
    /// right-upper-near corner `run`.
    pub fn axis_aligned_box(
        lbf: Vec3,
        run: Vec3,
        material: impl Into<Arc<Material>>,
    ) -> SceneResult<Geometry> {
        let size = run - lbf;
        if size.is_nan() || size.min_element() <= 0.0 {
            return Err(SceneError::DegenerateBox);
        }
        let transform = Transform::IDENTITY
            .translate((lbf + run) * 0.5)
            .scale(size);
        Ok(Node::new(AxisAlignedBox::new(material), transform).into())
    }

    /// Place `geometry` with `transform`.
    pub fn node(geometry: impl Into<Geometry>, transform: Transform) -> Geometry {
        Node::new(geometry, transform).into()
    }
}

/// An ordered collection of geometries reduced to their nearest hit.
///
/// On an exact tie the earlier child wins.
#[derive(Debug, Clone, Default)]
pub struct Group {
    children: Vec<Geometry>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, geometry: impl Into<Geometry>) {
        self.children.push(geometry.into());
    }

    pub fn with(mut self, geometry: impl Into<Geometry>) -> Self {
        self.add(geometry);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Geometry] {
        &self.children
    }
}

impl FromIterator<Geometry> for Group {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Group {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        nearest_hit(&self.children, ray, ray_t)
    }
}

macro_rules! impl_from_geometry {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Geometry {
                fn from(value: $ty) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_geometry!(
    Plane(Plane),
    Sphere(Sphere),
    AxisAlignedBox(AxisAlignedBox),
    Triangle(Triangle),
    Mesh(TriangleMesh),
    Node(Node),
    Group(Group),
);
