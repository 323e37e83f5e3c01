//! Thin-lens camera for ray generation.

use crate::Ray;
use glint_core::{CameraSettings, SceneResult};
use glint_math::{random_in_unit_disk, Point3, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// All fields are derived once from [`CameraSettings`]; the camera is
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,

    // Orthonormal basis; the camera looks along -w
    u: Vec3,
    v: Vec3,
    w: Vec3,

    lens_radius: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Build a camera from validated settings.
    pub fn new(settings: &CameraSettings) -> SceneResult<Self> {
        settings.validate()?;

        // Calculate viewport dimensions
        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = settings.aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.vup.cross(w).normalize();
        let v = w.cross(u);

        // The view plane sits at the focal plane, not at unit distance
        let origin = settings.look_from;
        let horizontal = settings.focus_dist * viewport_width * u;
        let vertical = settings.focus_dist * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - settings.focus_dist * w;

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
            aspect_ratio: settings.aspect_ratio,
        })
    }

    /// Generate a ray through view-plane coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner of the view and `(1, 1)` the
    /// upper-right. The origin is jittered across the lens disk while the
    /// target on the focal plane stays fixed, so only points on that plane
    /// are sharp.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius <= 0.0 {
            Vec3::ZERO
        } else {
            self.defocus_offset(rng)
        };

        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }

    /// Sample an offset on the lens disk, in the camera's u-v plane.
    fn defocus_offset(&self, rng: &mut dyn RngCore) -> Vec3 {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        self.u * rd.x + self.v * rd.y
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}
