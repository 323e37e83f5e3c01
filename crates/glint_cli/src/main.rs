//! glint - render a sphere scene to an image file.

mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_core::{builtin_scene, SceneDescription, BUILTIN_SCENES};
use glint_renderer::{build_world, render_into, Camera, ImageBuffer};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = args.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    log::info!("Starting glint");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scene = load_scene(&args.scene, &mut rng)?;
    apply_overrides(&mut scene, &args);

    // A seed stored in the scene only applies when none was given on the command line
    if args.seed.is_none() {
        if let Some(seed) = scene.render.seed {
            rng = StdRng::seed_from_u64(seed);
        }
    }

    if let Some(path) = &args.dump_scene {
        scene
            .save(path)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
        log::info!("Wrote scene to {}", path.display());
    }

    let world = build_world(&scene).context("Invalid scene")?;
    let camera = Camera::new(&scene.camera).context("Invalid camera")?;

    let settings = &scene.render;
    let height = settings.image_height(camera.aspect_ratio());
    let mut image = ImageBuffer::new(settings.image_width, height);

    let progress = ProgressBar::new(height as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} scanlines ETA: {eta}")
            .context("Invalid progress bar template")?,
    );

    render_into(
        &camera,
        &world,
        settings,
        &mut rng,
        &mut image,
        &mut |done: u32| progress.set_position(done as u64),
    );
    progress.finish_and_clear();

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    Ok(())
}

/// Resolve `--scene` as a built-in scene name or a JSON file.
fn load_scene(name: &str, rng: &mut StdRng) -> Result<SceneDescription> {
    if let Some(scene) = builtin_scene(name, rng) {
        log::info!("Using built-in scene '{}'", name);
        return Ok(scene);
    }

    let path = Path::new(name);
    if !path.exists() {
        bail!(
            "Unknown scene '{}': expected one of {:?} or a scene file",
            name,
            BUILTIN_SCENES
        );
    }

    SceneDescription::load(path).with_context(|| format!("Failed to load scene {}", name))
}

fn apply_overrides(scene: &mut SceneDescription, args: &Args) {
    let render = &mut scene.render;
    if let Some(width) = args.width {
        render.image_width = width;
    }
    if let Some(samples) = args.samples {
        render.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        render.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        render.seed = Some(seed);
    }
}
