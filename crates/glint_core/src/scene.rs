//! Scene description types.
//!
//! A scene is a camera, render settings, a table of named materials, and a
//! list of spheres referring to materials by name. Many spheres may share a
//! material; the renderer turns each named material into a single shared
//! instance.

use std::collections::BTreeMap;
use std::path::Path;

use glint_math::{Color, Point3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::settings::{CameraSettings, RenderSettings};

/// A surface material definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// Diffuse surface
    Lambertian { albedo: Color },
    /// Mirror with roughness; fuzz above 1 is clamped by the renderer
    Metal { albedo: Color, fuzz: f64 },
    /// Transparent surface such as glass (1.5) or water (1.33)
    Dielectric { refractive_index: f64 },
}

impl MaterialDesc {
    fn validate(&self) -> SceneResult<()> {
        match *self {
            MaterialDesc::Dielectric { refractive_index } => {
                if refractive_index.is_finite() && refractive_index > 0.0 {
                    Ok(())
                } else {
                    Err(SceneError::InvalidRefractiveIndex(refractive_index))
                }
            }
            MaterialDesc::Lambertian { .. } | MaterialDesc::Metal { .. } => Ok(()),
        }
    }
}

/// A sphere referring to a material by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Point3,
    pub radius: f64,
    pub material: String,

    /// Flip the normals so the sphere bounds an empty cavity, e.g. the air
    /// inside a glass bubble.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hollow: bool,
}

/// Everything needed to render one picture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraSettings,

    #[serde(default)]
    pub render: RenderSettings,

    /// Named materials, kept sorted so saved scenes are stable
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,

    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the given camera.
    pub fn new(camera: CameraSettings) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Register a named material.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDesc) -> SceneResult<()> {
        let name = name.into();
        if self.materials.contains_key(&name) {
            return Err(SceneError::DuplicateMaterial(name));
        }
        self.materials.insert(name, material);
        Ok(())
    }

    /// Add a solid sphere using a previously registered material.
    pub fn add_sphere(&mut self, center: Point3, radius: f64, material: impl Into<String>) {
        self.spheres.push(SphereDesc {
            center,
            radius,
            material: material.into(),
            hollow: false,
        });
    }

    /// Add a sphere with inward-facing normals.
    pub fn add_hollow_sphere(&mut self, center: Point3, radius: f64, material: impl Into<String>) {
        self.spheres.push(SphereDesc {
            center,
            radius,
            material: material.into(),
            hollow: true,
        });
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> SceneResult<&MaterialDesc> {
        self.materials
            .get(name)
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
    }

    /// Check every setting, material and sphere.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;
        self.render.validate()?;

        for material in self.materials.values() {
            material.validate()?;
        }

        for sphere in &self.spheres {
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius(sphere.radius));
            }
            self.material(&sphere.material)?;
        }

        Ok(())
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene {}: {} spheres, {} materials",
            path.display(),
            scene.spheres.len(),
            scene.materials.len()
        );
        Ok(scene)
    }

    /// Write the scene to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
