//! Conversion from a scene description to renderable objects.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use glint_core::{MaterialDesc, SceneDescription, SceneError, SceneResult};

/// Build a shared material from its description.
pub fn build_material(desc: &MaterialDesc) -> Arc<dyn Material> {
    match *desc {
        MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDesc::Metal { albedo, fuzz } => {
            if !(0.0..=1.0).contains(&fuzz) {
                log::warn!("Metal fuzz {} outside [0, 1], clamping", fuzz);
            }
            Arc::new(Metal::new(albedo, fuzz))
        }
        MaterialDesc::Dielectric { refractive_index } => Arc::new(Dielectric::new(refractive_index)),
    }
}

/// Build the list of surfaces for a scene.
///
/// Each named material is instantiated once and shared by every sphere
/// that refers to it.
pub fn build_world(scene: &SceneDescription) -> SceneResult<HittableList> {
    scene.validate()?;

    let materials: HashMap<&str, Arc<dyn Material>> = scene
        .materials
        .iter()
        .map(|(name, desc)| (name.as_str(), build_material(desc)))
        .collect();

    let mut world = HittableList::new();
    for desc in &scene.spheres {
        let material = materials
            .get(desc.material.as_str())
            .cloned()
            .ok_or_else(|| SceneError::UnknownMaterial(desc.material.clone()))?;

        let mut sphere = Sphere::new(desc.center, desc.radius, material)?;
        if desc.hollow {
            sphere = sphere.hollow();
        }
        world.add(Box::new(sphere));
    }

    log::info!(
        "Built world: {} spheres sharing {} materials",
        world.len(),
        materials.len()
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Ray};
    use glint_core::dev_scene;
    use glint_math::{Color, Interval, Point3, Vec3};

    #[test]
    fn test_build_dev_scene() {
        let world = build_world(&dev_scene()).unwrap();
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn test_spheres_share_materials() {
        let mut scene = SceneDescription::default();
        scene
            .add_material("grey", MaterialDesc::Lambertian { albedo: Color::splat(0.5) })
            .unwrap();
        scene.add_sphere(Point3::new(-1.0, 0.0, -2.0), 0.5, "grey");
        scene.add_sphere(Point3::new(1.0, 0.0, -2.0), 0.5, "grey");
        let world = build_world(&scene).unwrap();

        let interval = Interval::new(0.001, f64::INFINITY);
        let left = world
            .hit(&Ray::new(Point3::ZERO, Vec3::new(-1.0, 0.0, -2.0)), interval)
            .unwrap();
        let right = world
            .hit(&Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, -2.0)), interval)
            .unwrap();

        let left_ptr = left.material as *const dyn Material as *const ();
        let right_ptr = right.material as *const dyn Material as *const ();
        assert_eq!(left_ptr, right_ptr);
    }

    #[test]
    fn test_invalid_scene_rejected() {
        let mut scene = SceneDescription::default();
        scene.add_sphere(Point3::ZERO, 1.0, "missing");
        assert!(matches!(
            build_world(&scene),
            Err(SceneError::UnknownMaterial(_))
        ));
    }
}
