//! glint core - scene description for the glint path tracer.
//!
//! This crate provides:
//!
//! - **Settings**: `CameraSettings` and `RenderSettings`
//! - **Scene description**: materials and spheres, validated and (de)serialized as JSON
//! - **Built-in scenes**: the development scene and the random-sphere cover scene
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scene.json")?;
//! println!("{} spheres, {} materials", scene.spheres.len(), scene.materials.len());
//! ```

pub mod builtin;
pub mod error;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use builtin::{builtin_scene, cover_scene, dev_scene, BUILTIN_SCENES};
pub use error::{SceneError, SceneResult};
pub use scene::{MaterialDesc, SceneDescription, SphereDesc};
pub use settings::{CameraSettings, RenderSettings};
