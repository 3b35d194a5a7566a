//! Built-in demo scenes.

use std::f32::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use lux_renderer::{
    AxisAlignedBox, Camera, Color, Geometry, Group, Light, Material, SceneResult, Sphere, Texture,
    Transform, Triangle, TriangleMesh, Vec3, World, REFRACTION_INDEX_AIR,
};

/// A world together with the camera that looks at it.
pub struct Scene {
    pub world: World,
    pub camera: Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Unlit flat colours
    Colors,
    /// Lambert shading under a point light
    Lambert,
    /// Phong shading under a point light
    Phong,
    /// Phong shading under a directional light
    Directional,
    /// Phong shading under a spot light
    Spot,
    /// Spot light with ambient fill
    SpotAmbient,
    /// Several lights of every kind
    MultiLight,
    /// Reflective spheres over a checkered floor
    Mirrors,
    /// A squashed, rotated sphere
    Smartie,
    /// A scaled, rotated box
    Box,
    /// An OBJ file given with --mesh
    Mesh,
}

impl SceneKind {
    pub fn description(self) -> &'static str {
        match self {
            SceneKind::Colors => "unlit flat colours",
            SceneKind::Lambert => "Lambert shading under a point light",
            SceneKind::Phong => "Phong shading under a point light",
            SceneKind::Directional => "Phong shading under a directional light",
            SceneKind::Spot => "Phong shading under a spot light",
            SceneKind::SpotAmbient => "spot light with ambient fill",
            SceneKind::MultiLight => "several lights of every kind",
            SceneKind::Mirrors => "reflective spheres over a checkered floor",
            SceneKind::Smartie => "a squashed, rotated sphere",
            SceneKind::Box => "a scaled, rotated box",
            SceneKind::Mesh => "an OBJ file given with --mesh",
        }
    }
}

/// Assemble the scene for `kind`.
///
/// The `mesh` scene is built around `mesh` and fails without it; every other
/// scene gets the mesh added next to its own geometry.
pub fn build(kind: SceneKind, mesh: Option<&Path>) -> Result<Scene> {
    let mut scene = match kind {
        SceneKind::Colors => showcase(Color::ZERO, |c| Ok(Material::single_color(c)), |_| Ok(()))?,
        SceneKind::Lambert => showcase(Color::ZERO, |c| Ok(Material::lambert(c)), |world| {
            world.add_light(Light::point(Color::ONE, Vec3::splat(4.0)));
            Ok(())
        })?,
        SceneKind::Phong => showcase(Color::ZERO, phong, |world| {
            world.add_light(Light::point(Color::ONE, Vec3::splat(4.0)));
            Ok(())
        })?,
        SceneKind::Directional => showcase(Color::ZERO, phong, |world| {
            world.add_light(Light::directional(Color::ONE, Vec3::splat(-1.0))?);
            Ok(())
        })?,
        SceneKind::Spot => showcase(Color::ZERO, phong, spot)?,
        SceneKind::SpotAmbient => showcase(Color::splat(0.25), phong, spot)?,
        SceneKind::MultiLight => multi_light()?,
        SceneKind::Mirrors => mirrors()?,
        SceneKind::Smartie => smartie()?,
        SceneKind::Box => rotated_box()?,
        SceneKind::Mesh => {
            let path = mesh.context("the mesh scene needs --mesh <FILE>")?;
            mesh_scene(path)?
        }
    };

    if let Some(path) = mesh.filter(|_| kind != SceneKind::Mesh) {
        scene.world.add(load_mesh(path)?);
    }

    log::debug!(
        "Built scene {:?}: {} geometries, {} lights",
        kind,
        scene.world.len(),
        scene.world.lights().len()
    );
    Ok(scene)
}

fn phong(color: Color) -> SceneResult<Material> {
    Material::phong(color, Color::ONE, 64)
}

fn spot(world: &mut World) -> Result<()> {
    world.add_light(Light::spot(
        Color::ONE,
        Vec3::splat(4.0),
        Vec3::splat(-1.0),
        PI / 14.0,
    )?);
    Ok(())
}

fn corner_camera() -> Result<Camera> {
    Ok(Camera::perspective(
        Vec3::splat(4.0),
        Vec3::splat(-1.0),
        Vec3::Y,
        PI / 4.0,
    )?)
}

/// Floor, sphere, box and triangle, each with its own colour.
fn showcase<M, L>(ambient: Color, material: M, lights: L) -> Result<Scene>
where
    M: Fn(Color) -> SceneResult<Material>,
    L: FnOnce(&mut World) -> Result<()>,
{
    let mut world = World::new(ambient, Color::ZERO);
    world.add(Geometry::plane_through(
        Vec3::ZERO,
        Vec3::Y,
        material(Color::new(1.0, 0.0, 0.0))?,
    )?);
    world.add(Geometry::sphere_at(
        Vec3::ONE,
        0.5,
        material(Color::new(0.0, 1.0, 0.0))?,
    )?);
    world.add(Geometry::axis_aligned_box(
        Vec3::new(-1.5, 0.5, 0.5),
        Vec3::new(-0.5, 1.5, 1.5),
        material(Color::new(0.0, 0.0, 1.0))?,
    )?);
    world.add(Triangle::with_normals(
        [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
        ],
        [Vec3::Z; 3],
        material(Color::new(1.0, 1.0, 0.0))?,
    ));
    lights(&mut world)?;

    Ok(Scene {
        world,
        camera: corner_camera()?,
    })
}

fn multi_light() -> Result<Scene> {
    let mut world = World::new(Color::splat(0.1), Color::ZERO);
    world.add(Geometry::plane_through(Vec3::ZERO, Vec3::Y, phong(Color::new(1.0, 0.0, 0.0))?)?);
    world.add(Geometry::plane_through(
        Vec3::new(-3.0, 0.0, 0.0),
        Vec3::new(-3.0, -0.5, -1.0),
        phong(Color::ONE)?,
    )?);
    world.add(Geometry::sphere_at(Vec3::new(1.5, 0.0, 0.0), 0.5, phong(Color::new(0.0, 1.0, 0.0))?)?);
    world.add(Geometry::sphere_at(Vec3::new(-1.0, 1.0, 0.0), 0.25, phong(Color::new(0.0, 1.0, 1.0))?)?);
    world.add(Geometry::sphere_at(Vec3::new(-1.0, 1.0, -5.0), 1.0, phong(Color::new(1.0, 1.0, 0.2))?)?);
    world.add(Geometry::axis_aligned_box(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(0.5, 0.5, 5.0),
        phong(Color::new(0.3, 1.0, 0.3))?,
    )?);

    world.add_light(Light::point(Color::new(0.4, 0.2, 0.2), Vec3::splat(4.0)));
    world.add_light(Light::point(Color::splat(0.1), Vec3::new(-4.0, 4.0, 4.0)));
    world.add_light(Light::directional(Color::splat(0.1), Vec3::splat(-1.0))?);
    world.add_light(Light::spot(
        Color::splat(0.6),
        Vec3::new(1.0, 1.0, 4.0),
        Vec3::new(-1.0, -1.0, -4.0),
        PI / 7.0,
    )?);
    world.add_light(Light::spot(
        Color::splat(0.1),
        Vec3::ONE,
        Vec3::splat(-1.0),
        PI / 7.0,
    )?);

    let camera = Camera::perspective(
        Vec3::new(1.0, 1.0, 4.0),
        Vec3::new(-1.0, -1.0, -4.0),
        Vec3::Y,
        PI / 4.0,
    )?;
    Ok(Scene { world, camera })
}

fn mirrors() -> Result<Scene> {
    let mut world = World::new(Color::splat(0.1), Color::new(0.2, 0.3, 0.5))
        .with_refraction_index(REFRACTION_INDEX_AIR);
    world.add(Geometry::plane_through(
        Vec3::ZERO,
        Vec3::Y,
        Material::lambert(Texture::checker(Color::splat(0.9), Color::splat(0.1), 1.0)?),
    )?);

    let chrome = Material::reflective(Color::splat(0.1), Color::ONE, 64, Color::splat(0.8))?;
    let spheres = Group::new()
        .with(Geometry::sphere_at(Vec3::new(1.0, 1.0, 1.0), 0.5, chrome.clone())?)
        .with(Geometry::sphere_at(Vec3::new(-0.5, 0.75, 1.5), 0.75, chrome)?)
        .with(Geometry::sphere_at(
            Vec3::new(0.5, 0.4, -0.5),
            0.4,
            phong(Color::new(0.8, 0.2, 0.2))?,
        )?);
    world.add(spheres);

    world.add_light(Light::point(Color::splat(0.8), Vec3::splat(4.0)));
    world.add_light(Light::point(Color::splat(0.2), Vec3::new(-4.0, 4.0, 4.0)).with_shadows(false));

    Ok(Scene {
        world,
        camera: corner_camera()?,
    })
}

fn smartie() -> Result<Scene> {
    let mut world = World::new(Color::splat(0.1), Color::ZERO);
    world.add(Geometry::node(
        Sphere::new(phong(Color::new(1.0, 0.0, 0.0))?),
        Transform::IDENTITY
            .rotate_y(PI / 0.2)
            .rotate_z(PI / 0.9)
            .rotate_x(PI / 1.15)
            .scale(Vec3::new(2.0, 0.5, 2.0)),
    ));
    world.add_light(Light::point(Color::ONE, Vec3::splat(4.0)).with_shadows(false));

    Ok(Scene {
        world,
        camera: corner_camera()?,
    })
}

fn rotated_box() -> Result<Scene> {
    let mut world = World::new(Color::splat(0.1), Color::ZERO);
    world.add(Geometry::node(
        AxisAlignedBox::new(Material::lambert(Color::new(1.0, 1.0, 0.0))),
        Transform::IDENTITY
            .rotate_x(PI / 1.17)
            .rotate_y(PI / 0.2)
            .rotate_z(PI / 1.15)
            .scale(Vec3::new(1.0, 0.26, 3.7)),
    ));
    world.add_light(Light::point(Color::ONE, Vec3::splat(4.0)).with_shadows(false));

    Ok(Scene {
        world,
        camera: corner_camera()?,
    })
}

fn load_mesh(path: &Path) -> Result<TriangleMesh> {
    let mesh = lux_core::load_obj(path)
        .with_context(|| format!("failed to load mesh {}", path.display()))?;
    Ok(TriangleMesh::from_mesh(&mesh, Material::lambert(Color::ONE)))
}

fn mesh_scene(path: &Path) -> Result<Scene> {
    let mut world = World::new(Color::ZERO, Color::ZERO).with_refraction_index(REFRACTION_INDEX_AIR);
    world.add(load_mesh(path)?);
    world.add_light(Light::point(Color::ONE, Vec3::splat(3.0)).with_shadows(false));

    let camera = Camera::perspective(Vec3::splat(2.5), Vec3::splat(-1.0), Vec3::Y, PI / 4.0)?;
    Ok(Scene { world, camera })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_renderer::{render, RenderConfig};

    #[test]
    fn test_builtin_scenes_build() {
        for kind in SceneKind::value_variants() {
            if *kind == SceneKind::Mesh {
                continue;
            }
            let scene = build(*kind, None).unwrap();
            assert!(!scene.world.is_empty(), "{kind:?} is empty");
        }
    }

    #[test]
    fn test_mesh_scene_requires_path() {
        assert!(build(SceneKind::Mesh, None).is_err());
    }

    #[test]
    fn test_mesh_added_to_any_scene() {
        let path = std::env::temp_dir().join(format!("lux_quad_{}.obj", std::process::id()));
        std::fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n",
        )
        .unwrap();

        let plain = build(SceneKind::Phong, None).unwrap();
        let with_mesh = build(SceneKind::Phong, Some(&path)).unwrap();
        let mesh_only = build(SceneKind::Mesh, Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(with_mesh.world.len(), plain.world.len() + 1);
        assert_eq!(with_mesh.world.lights().len(), plain.world.lights().len());
        // The mesh scene holds the mesh once, not twice
        assert_eq!(mesh_only.world.len(), 1);
    }

    #[test]
    fn test_missing_mesh_file_fails_any_scene() {
        let path = std::env::temp_dir().join("lux_no_such_mesh.obj");
        assert!(build(SceneKind::Colors, Some(&path)).is_err());
    }

    #[test]
    fn test_showcase_renders_floor() {
        let scene = build(SceneKind::Colors, None).unwrap();
        let config = RenderConfig::default().with_resolution(32, 24);
        let image = render(&scene.world, &scene.camera, &config);

        // The camera looks down at the red floor; the bottom row is all floor
        for x in 0..config.width {
            assert_eq!(image.get(x, config.height - 1), Color::new(1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_mirror_scene_reflects() {
        let scene = build(SceneKind::Mirrors, None).unwrap();
        let shallow = render(
            &scene.world,
            &scene.camera,
            &RenderConfig::default().with_resolution(16, 12).with_max_depth(1),
        );
        let deep = render(
            &scene.world,
            &scene.camera,
            &RenderConfig::default().with_resolution(16, 12).with_max_depth(4),
        );
        assert_ne!(shallow, deep);
    }
}
