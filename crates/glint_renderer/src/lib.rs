//! glint renderer - CPU Monte Carlo path tracing.
//!
//! Fires jittered camera rays through a thin-lens camera into a list of
//! spheres, follows each ray through diffuse, metal and glass scattering
//! until it escapes to the sky or runs out of bounces, and averages the
//! samples per pixel.

mod camera;
mod hittable;
mod material;
mod output;
mod ray;
mod renderer;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{
    color_to_rgb8, linear_to_gamma, write_ppm, ImageBuffer, OutputError, OutputResult, PixelSink,
};
pub use ray::Ray;
pub use renderer::{ray_colour, render, render_into, sample_pixel, sky_gradient, T_MIN};
pub use sphere::Sphere;
pub use world::{build_material, build_world};

/// Re-export the math and scene types used in this crate's API
pub use glint_core::{CameraSettings, RenderSettings, SceneDescription, SceneError, SceneResult};
pub use glint_math::{Color, Interval, Point3, Vec3};
