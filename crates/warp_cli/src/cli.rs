use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use warp_core::Scene;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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
#[derive(Parser, Debug)]
#[command(name = "warp")]
#[command(about = "Ray caster with gravitational lensing")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    #[arg(short, long, default_value = "render.png", help = "Output image path")]
    pub output: PathBuf,

    #[arg(long, help = "Image width in pixels (overrides the scene)")]
    pub width: Option<u32>,

    #[arg(long, help = "Image height in pixels (overrides the scene)")]
    pub height: Option<u32>,

    #[arg(long, help = "Sample points along curved pixel rays")]
    pub curve_steps: Option<u32>,

    #[arg(long, help = "Render buckets in parallel")]
    pub parallel: bool,

    #[arg(long, help = "Apply gamma 2.0 when writing the image")]
    pub gamma: bool,

    #[arg(long, help = "Write debug ray lines from the scene emitters to this JSON file")]
    pub debug_rays: Option<PathBuf>,

    #[arg(long, default_value = "0", help = "Seed for debug ray vertex sampling")]
    pub seed: u64,

    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides to the scene's render settings.
    pub fn apply_overrides(&self, scene: &mut Scene) {
        let render = &mut scene.render;
        if let Some(width) = self.width {
            render.width = width;
        }
        if let Some(height) = self.height {
            render.height = height;
        }
        if let Some(steps) = self.curve_steps {
            render.curve_steps = steps;
        }
        render.parallel |= self.parallel;
        render.gamma_correct |= self.gamma;
    }
}
