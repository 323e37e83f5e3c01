//! Errors raised while building or loading a scene.

use thiserror::Error;

/// Errors that can occur while describing, validating or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Material defined twice: {0}")]
    DuplicateMaterial(String),

    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("Refractive index must be finite and positive, got {0}")]
    InvalidRefractiveIndex(f64),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidRender(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
