//! Camera and render settings.
//!
//! Both are plain data: the renderer derives its immutable camera basis
//! from `CameraSettings`, and the sampling loop reads `RenderSettings`.

use glint_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Construction parameters for a thin-lens camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position
    pub look_from: Point3,
    /// Point the camera looks at
    pub look_at: Point3,
    /// Up hint, need not be perpendicular to the view direction
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Image width divided by image height
    pub aspect_ratio: f64,
    /// Lens diameter, 0 for a pinhole
    pub aperture: f64,
    /// Distance from `look_from` to the plane of perfect focus
    pub focus_dist: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aperture: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Check that a camera basis can be derived from these settings.
    pub fn validate(&self) -> SceneResult<()> {
        let invalid = |reason: &str| Err(SceneError::InvalidCamera(reason.to_string()));

        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid("vfov must be between 0 and 180 degrees");
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return invalid("aspect ratio must be finite and positive");
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return invalid("focus distance must be finite and positive");
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return invalid("aperture must be finite and non-negative");
        }

        let view = self.look_from - self.look_at;
        if !view.is_finite() || view.length_squared() < 1e-12 {
            return invalid("look_from and look_at must be distinct");
        }
        if !self.vup.is_finite() {
            return invalid("vup must be finite");
        }
        if self.vup.cross(view).length_squared() < 1e-12 {
            return invalid("vup must not be parallel to the view direction");
        }

        Ok(())
    }
}

/// Settings for the pixel sampling loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels; the height follows from the aspect ratio
    pub image_width: u32,
    /// Jittered camera rays per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per camera ray
    pub max_depth: u32,
    /// Seed for the random source, or `None` to seed from the OS
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Image height for the given aspect ratio, never below one pixel.
    pub fn image_height(&self, aspect_ratio: f64) -> u32 {
        ((self.image_width as f64 / aspect_ratio) as u32).max(1)
    }

    /// Check that the sampling loop can run with these settings.
    pub fn validate(&self) -> SceneResult<()> {
        if self.image_width == 0 {
            return Err(SceneError::InvalidRender("image width must be at least 1".into()));
        }
        if self.samples_per_pixel == 0 {
            return Err(SceneError::InvalidRender(
                "samples per pixel must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
