//! Built-in scenes.

use glint_math::{random_color, random_color_range, random_f64, random_f64_range, Color, Point3, Vec3};
use rand::RngCore;

use crate::scene::{MaterialDesc, SceneDescription};
use crate::settings::{CameraSettings, RenderSettings};

/// Names accepted by [`builtin_scene`].
pub const BUILTIN_SCENES: &[&str] = &["dev", "cover"];

/// Build a built-in scene by name.
///
/// The RNG is only consumed by scenes with random content.
pub fn builtin_scene(name: &str, rng: &mut dyn RngCore) -> Option<SceneDescription> {
    match name {
        "dev" => Some(dev_scene()),
        "cover" => Some(cover_scene(rng)),
        _ => None,
    }
}

/// Five spheres on a large ground sphere: diffuse, metal, and a hollow
/// glass bubble, viewed through a wide-open lens.
pub fn dev_scene() -> SceneDescription {
    let look_from = Point3::new(3.0, 3.0, 2.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let camera = CameraSettings::default()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(20.0, 2.0, (look_from - look_at).length())
        .with_aspect_ratio(16.0 / 9.0);

    let mut scene = SceneDescription::new(camera);
    let materials = [
        ("ground", MaterialDesc::Lambertian { albedo: Color::new(0.8, 0.8, 0.0) }),
        ("center", MaterialDesc::Lambertian { albedo: Color::new(0.1, 0.2, 0.5) }),
        ("left", MaterialDesc::Dielectric { refractive_index: 1.5 }),
        ("right", MaterialDesc::Metal { albedo: Color::new(0.8, 0.6, 0.2), fuzz: 0.0 }),
    ];
    for (name, material) in materials {
        scene.materials.insert(name.to_string(), material);
    }

    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, "ground");
    scene.add_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, "center");
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, "left");
    scene.add_hollow_sphere(Point3::new(-1.0, 0.0, -1.0), 0.45, "left");
    scene.add_sphere(Point3::new(1.0, 0.0, -1.0), 0.5, "right");

    scene
}

/// A field of small random spheres around three large ones.
pub fn cover_scene(rng: &mut dyn RngCore) -> SceneDescription {
    let camera = CameraSettings::default()
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.1, 10.0)
        .with_aspect_ratio(3.0 / 2.0);

    let mut scene = SceneDescription::new(camera);
    scene.render = RenderSettings {
        image_width: 1200,
        samples_per_pixel: 500,
        max_depth: 50,
        seed: None,
    };

    scene.materials.insert(
        "ground".to_string(),
        MaterialDesc::Lambertian { albedo: Color::splat(0.5) },
    );
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, "ground");

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                0.2,
                b as f64 + 0.9 * random_f64(rng),
            );

            // Keep clear of the big metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random_color(rng) * random_color(rng);
                MaterialDesc::Lambertian { albedo }
            } else if choose_mat < 0.95 {
                let albedo = random_color_range(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                MaterialDesc::Metal { albedo, fuzz }
            } else {
                MaterialDesc::Dielectric { refractive_index: 1.5 }
            };

            let name = format!("small_{}_{}", a, b);
            scene.materials.insert(name.clone(), material);
            scene.add_sphere(center, 0.2, name);
        }
    }

    let big = [
        ("glass", Point3::new(0.0, 1.0, 0.0), MaterialDesc::Dielectric { refractive_index: 1.5 }),
        ("clay", Point3::new(-4.0, 1.0, 0.0), MaterialDesc::Lambertian { albedo: Color::new(0.4, 0.2, 0.1) }),
        ("steel", Point3::new(4.0, 1.0, 0.0), MaterialDesc::Metal { albedo: Color::new(0.7, 0.6, 0.5), fuzz: 0.0 }),
    ];
    for (name, center, material) in big {
        scene.materials.insert(name.to_string(), material);
        scene.add_sphere(center, 1.0, name);
    }

    log::debug!("Generated cover scene with {} spheres", scene.spheres.len());
    scene
}
