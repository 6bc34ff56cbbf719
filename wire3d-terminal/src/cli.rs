//! Command-line interface
use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, MeshConfig};

/// Distance between meshes given with repeated `--shape`
pub const SHAPE_SPACING: f32 = 40.0;

/// Spin wireframe meshes in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "wire3d", version, about)]
pub struct Cli {
    /// TOML config file (defaults to ./wire3d.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds to animate before exiting
    #[arg(short, long)]
    pub duration: Option<f32>,

    /// Delay between frames in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Shape to show (cube, tetrahedron); repeat for several meshes
    #[arg(short, long = "shape")]
    pub shapes: Vec<String>,

    /// Perspective focal length
    #[arg(long)]
    pub focal_length: Option<f32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Override `config` with any flags that were given
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(duration) = self.duration {
            config.animation.duration_secs = duration;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.animation.tick_ms = tick_ms;
        }
        if let Some(focal_length) = self.focal_length {
            config.animation.focal_length = focal_length;
        }
        if !self.shapes.is_empty() {
            // Side by side across the screen, centered on the middle column
            let middle = (self.shapes.len() - 1) as f32 / 2.0;
            config.scene.meshes = self
                .shapes
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    MeshConfig::new(s).at([0.0, (i as f32 - middle) * SHAPE_SPACING, 0.0])
                })
                .collect();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config
    }
}
