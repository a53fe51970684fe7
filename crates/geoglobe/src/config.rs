use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

pub const CONFIG_PATH: &str = "globe_config.toml";

static CONFIG: OnceLock<Mutex<GlobeConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it from `globe_config.toml`
/// on first use. A missing or broken file falls back to the defaults.
pub fn get_config() -> GlobeConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    config_mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Re-read `globe_config.toml`. On failure the cached configuration is kept.
pub fn reload_config() -> Result<(), ConfigError> {
    reload_config_from(CONFIG_PATH)
}

pub fn reload_config_from(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let new_config = GlobeConfig::load_from_file(path)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_config;
    Ok(())
}

fn load_or_default(path: &str) -> GlobeConfig {
    match GlobeConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using built-in defaults");
            GlobeConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub globe: GlobeSection,
    pub markers: MarkerConfig,
    pub interaction: InteractionConfig,
    pub stars: StarConfig,
    pub camera: CameraConfig,
    pub tooltip: TooltipConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSection {
    pub radius: f32,
    /// Longitude and latitude subdivisions of the globe mesh.
    pub sectors: u32,
    pub stacks: u32,
    pub atmosphere_scale: f32,
    pub atmosphere_color: [f32; 4],
    /// Yaw applied to the textured sphere only, so the image lines up with
    /// projected marker positions.
    pub texture_yaw_offset: f32,
}

impl Default for GlobeSection {
    fn default() -> Self {
        Self {
            radius: 5.0,
            sectors: 50,
            stacks: 50,
            atmosphere_scale: 1.1,
            atmosphere_color: [0.3, 0.6, 1.0, 1.0],
            texture_yaw_offset: -std::f32::consts::FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Population that maps to a size scale of 1.0.
    pub population_unit: f64,
    pub max_scale: f32,
    pub width_factor: f32,
    pub min_width: f32,
    pub depth_factor: f32,
    pub min_depth: f32,
    /// Upper bound of the random pulse delay, in seconds.
    pub max_phase: f32,
    /// Seconds for one half of the pulse (full depth to flat).
    pub pulse_duration: f32,
    pub dim_opacity: f32,
    pub highlight_opacity: f32,
    pub color: [f32; 3],
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            population_unit: 1_000_000_000.0,
            max_scale: 2.0,
            width_factor: 0.2,
            min_width: 0.1,
            depth_factor: 0.8,
            min_depth: 0.2,
            max_phase: 1.0,
            pulse_duration: 2.0,
            dim_opacity: 0.4,
            highlight_opacity: 1.0,
            // #3bf7ff
            color: [0.231, 0.969, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Radians of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Radians per second, only while idle and only with `auto_rotate`.
    pub idle_rotation_speed: f32,
    pub auto_rotate: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.005,
            idle_rotation_speed: 0.12,
            auto_rotate: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    /// Width and height of the box the stars are scattered in.
    pub spread: f32,
    /// Stars are placed between z = -depth and z = 0.
    pub depth: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            spread: 2000.0,
            depth: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 15.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub thousands_separator: char,
    /// Pixel offset of the tooltip from the pointer.
    pub offset: [f32; 2],
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            offset: [12.0, 12.0],
        }
    }
}

impl GlobeConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content =
            toml::to_string_pretty(self).map_err(|err| ConfigError::Parse(err.to_string()))?;
        std::fs::write(path, content).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
