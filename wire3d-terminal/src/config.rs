//! Application configuration
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. A TOML file (`wire3d.toml` in the working directory, or `--config`)
//! 3. Environment variables (`WIRE3D_SECTION__KEY`)
//!
//! Command-line flags are applied on top by [`crate::cli::Cli::apply`].

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use wire3d_core::projection::DEFAULT_FOCAL_LENGTH;
use wire3d_core::{
    apply_matrix_to_mesh, AnimationConfig, Axis, Mesh, RenderError, Shape, Spin, Transform, Vec3,
};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "wire3d.toml";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Load(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(Box::new(e))
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from `wire3d.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load using an explicit config file, which then must exist
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        // WIRE3D_ANIMATION__TICK_MS=20 -> animation.tick_ms = 20
        figment = figment.merge(Env::prefixed("WIRE3D_").split("__"));

        Ok(figment.extract()?)
    }

    /// Timing and spin settings for the animation loop
    pub fn animation_config(&self) -> Result<AnimationConfig, RenderError> {
        let settings = &self.animation;
        let spins = self
            .scene
            .spins
            .iter()
            .map(SpinConfig::to_spin)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnimationConfig {
            tick: Duration::from_millis(settings.tick_ms),
            duration: seconds("animation.duration_secs", settings.duration_secs)?,
            highlight_period: seconds("animation.highlight_secs", settings.highlight_secs)?,
            focal_length: settings.focal_length,
            spins,
        })
    }

    /// Generate and place every configured mesh
    pub fn meshes(&self) -> Result<Vec<Mesh>, RenderError> {
        self.scene.meshes.iter().map(MeshConfig::build).collect()
    }
}

/// Whole milliseconds nearest to `value` seconds
///
/// f32 seconds are rarely exact (0.35 is 349.99999ms), and tick counts divide
/// the result, so round before converting.
fn seconds(name: &str, value: f32) -> Result<Duration, RenderError> {
    let millis = (f64::from(value) * 1000.0).round();
    if !millis.is_finite() || millis < 0.0 || millis > u64::MAX as f64 {
        return Err(RenderError::InvalidArgument(format!(
            "{} = {} is not a duration",
            name, value
        )));
    }
    Ok(Duration::from_millis(millis as u64))
}

/// Animation timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Delay between frames in milliseconds
    pub tick_ms: u64,
    /// Seconds before the animation stops on its own
    pub duration_secs: f32,
    /// Seconds each mesh keeps the highlight color
    pub highlight_secs: f32,
    /// Perspective focal length in cells
    pub focal_length: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            duration_secs: 10.0,
            highlight_secs: 2.0,
            focal_length: DEFAULT_FOCAL_LENGTH,
        }
    }
}

/// Meshes on screen and how they spin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub meshes: Vec<MeshConfig>,
    /// Rotation steps applied to every mesh each tick, in order
    pub spins: Vec<SpinConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            meshes: vec![MeshConfig::new("cube")],
            spins: vec![
                SpinConfig {
                    axis: "y".to_string(),
                    degrees: 3.0,
                },
                SpinConfig {
                    axis: "x".to_string(),
                    degrees: -2.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// `cube` or `tetrahedron`
    pub shape: String,
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    /// Optional shear `[a, b]` applied after scaling
    #[serde(default)]
    pub shear: Option<[f32; 2]>,
    /// Offset added to every vertex when projecting
    #[serde(default)]
    pub position: [f32; 3],
}

fn default_scale() -> [f32; 3] {
    [15.0, 15.0, 15.0]
}

impl MeshConfig {
    pub fn new(shape: &str) -> Self {
        Self {
            shape: shape.to_string(),
            scale: default_scale(),
            shear: None,
            position: [0.0; 3],
        }
    }

    pub fn at(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    pub fn build(&self) -> Result<Mesh, RenderError> {
        let shape: Shape = self.shape.parse()?;
        let [x, y, z] = self.scale;
        let mut mesh = apply_matrix_to_mesh(shape.generate(), &Transform::scale_matrix(x, y, z));
        if let Some([a, b]) = self.shear {
            mesh = apply_matrix_to_mesh(mesh, &Transform::shear_matrix(a, b));
        }
        let [px, py, pz] = self.position;
        Ok(mesh.with_position(Vec3::new(px, py, pz)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// `x`, `y` or `z`
    pub axis: String,
    /// Degrees per tick, negative to reverse
    pub degrees: f32,
}

impl SpinConfig {
    pub fn to_spin(&self) -> Result<Spin, RenderError> {
        let axis: Axis = self.axis.parse()?;
        Ok(Spin::new(axis, self.degrees))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter, overridden by `RUST_LOG`
    pub level: String,
    /// Write logs here instead of stderr (stderr shares the terminal)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
