//! The radiance estimator and the pixel sampling loop.
//!
//! Each pixel averages independent light paths, jittered within the pixel
//! and cut off after a fixed number of bounces. The sky gradient is the
//! only light source.

use std::time::Instant;

use crate::{Camera, Color, Hittable, ImageBuffer, PixelSink, Ray};
use glint_core::RenderSettings;
use glint_math::{random_f64, Interval};
use rand::RngCore;

/// Smallest accepted hit distance. Scattered rays start exactly on the
/// surface they left, and rounding would otherwise let them hit it again.
pub const T_MIN: f64 = 0.001;

/// Estimate the light arriving along `ray`.
///
/// Traces the ray through the scene, multiplying in each surface's
/// attenuation, until it escapes to the sky, is absorbed, or `depth`
/// bounces have been used.
pub fn ray_colour(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_colour(&result.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Light from the sky for a ray that escaped the scene.
///
/// Blends white at the horizon-below into sky blue straight up, by the
/// vertical component of the unit direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Sum `samples_per_pixel` jittered radiance estimates for pixel `(i, j)`.
///
/// `j` counts rows from the bottom of the image. The sum is returned
/// unaveraged; dividing by the sample count is the sink's job.
#[allow(clippy::too_many_arguments)]
pub fn sample_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    image_width: u32,
    image_height: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let s_scale = 1.0 / (image_width.max(2) - 1) as f64;
    let t_scale = 1.0 / (image_height.max(2) - 1) as f64;
    let mut pixel_color = Color::ZERO;

    for _ in 0..settings.samples_per_pixel {
        let s = (i as f64 + random_f64(rng)) * s_scale;
        let t = (j as f64 + random_f64(rng)) * t_scale;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_colour(&ray, world, settings.max_depth, rng);
    }

    pixel_color
}

/// Render every pixel into `sink`, top row first.
///
/// `on_scanline` is called after each completed row with the number of
/// rows finished so far.
pub fn render_into(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
    sink: &mut dyn PixelSink,
    on_scanline: &mut dyn FnMut(u32),
) {
    let width = settings.image_width;
    let height = settings.image_height(camera.aspect_ratio());

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth
    );
    let start = Instant::now();

    for row in 0..height {
        let j = height - 1 - row;
        for i in 0..width {
            let sum = sample_pixel(camera, world, i, j, width, height, settings, rng);
            sink.put_pixel(i, row, sum, settings.samples_per_pixel);
        }
        log::debug!("Scanlines remaining: {}", j);
        on_scanline(row + 1);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
}

/// Render into a fresh [`ImageBuffer`] sized from the settings.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let height = settings.image_height(camera.aspect_ratio());
    let mut image = ImageBuffer::new(settings.image_width, height);
    render_into(camera, world, settings, rng, &mut image, &mut |_: u32| {});
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Material, Metal, Sphere};
    use glint_core::CameraSettings;
    use glint_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn single_sphere_world(material: Arc<dyn Material>) -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(
            Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material).unwrap(),
        ));
        world
    }

    #[test]
    fn test_sky_gradient() {
        let up = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, 3.0, 0.0)));
        let down = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0)));
        let level = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0)));

        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);
        assert!((down - Color::ONE).length() < 1e-12);
        assert!((level - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = single_sphere_world(Arc::new(Lambertian::new(Color::splat(0.5))));
        let mut rng = StdRng::seed_from_u64(1);

        for direction in [Vec3::NEG_Z, Vec3::Y, Vec3::new(1.0, -2.0, 0.5)] {
            let ray = Ray::new(Point3::ZERO, direction);
            assert_eq!(ray_colour(&ray, &world, 0, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_miss_returns_sky() {
        let world = single_sphere_world(Arc::new(Lambertian::new(Color::splat(0.5))));
        let mut rng = StdRng::seed_from_u64(1);
        let ray = Ray::new(Point3::ZERO, Vec3::Y);

        assert_eq!(ray_colour(&ray, &world, 10, &mut rng), sky_gradient(&ray));
    }

    #[test]
    fn test_single_bounce_budget_is_black_on_hit() {
        // One bounce hits the sphere, and the scattered ray has no budget left
        let world = single_sphere_world(Arc::new(Lambertian::new(Color::splat(0.5))));
        let mut rng = StdRng::seed_from_u64(1);
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        assert_eq!(ray_colour(&ray, &world, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_mirror_attenuates_sky() {
        // A perfect mirror facing the camera reflects the ray straight back
        let albedo = Color::new(0.8, 0.6, 0.2);
        let world = single_sphere_world(Arc::new(Metal::new(albedo, 0.0)));
        let mut rng = StdRng::seed_from_u64(1);
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        let color = ray_colour(&ray, &world, 5, &mut rng);
        let reflected_sky = sky_gradient(&Ray::new(Point3::ZERO, Vec3::Z));
        assert!((color - albedo * reflected_sky).length() < 1e-9);
    }

    #[test]
    fn test_render_dimensions() {
        let camera = Camera::new(&CameraSettings::default().with_aspect_ratio(2.0)).unwrap();
        let world = HittableList::new();
        let settings = RenderSettings {
            image_width: 8,
            samples_per_pixel: 2,
            max_depth: 3,
            seed: None,
        };
        let mut rng = StdRng::seed_from_u64(5);

        let image = render(&camera, &world, &settings, &mut rng);
        assert_eq!(image.width, 8);
        assert_eq!(image.height, 4);

        // Empty world: the top row sees bluer sky than the bottom row
        assert!(image.get(4, 0).x < image.get(4, 3).x);
    }

    #[test]
    fn test_render_reports_every_scanline() {
        let camera = Camera::new(&CameraSettings::default().with_aspect_ratio(1.0)).unwrap();
        let world = HittableList::new();
        let settings = RenderSettings {
            image_width: 5,
            samples_per_pixel: 1,
            max_depth: 2,
            seed: None,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let mut image = ImageBuffer::new(5, 5);
        let mut rows = Vec::new();

        render_into(&camera, &world, &settings, &mut rng, &mut image, &mut |done: u32| {
            rows.push(done)
        });
        assert_eq!(rows, vec![1, 2, 3, 4, 5]);
    }
}
