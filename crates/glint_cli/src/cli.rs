use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A CPU Monte Carlo path tracer for sphere scenes")]
pub struct Args {
    /// Built-in scene name (dev, cover) or path to a scene JSON file
    #[arg(short, long, default_value = "dev")]
    pub scene: String,

    /// Output file path (.png or .ppm)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels; height follows the camera aspect ratio
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 'n')]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Random seed; renders with the same seed are identical
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level (RUST_LOG is used when unset, otherwise "info")
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Write the resolved scene as JSON before rendering
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,
}
