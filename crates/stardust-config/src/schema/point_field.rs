//! Point field generation and shading configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Optional shader file overrides. Unset stages use the built-in WGSL.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
}

/// Point cloud settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointFieldConfig {
    /// Points per grid side; the cloud holds `grid_size²` points.
    pub grid_size: u32,
    /// Added to the shader `time` uniform once per frame.
    pub time_step: f64,
    /// Point sprite diameter in logical pixels.
    pub point_size: f32,
    /// Seed for the point generator. Unset draws from OS entropy.
    pub seed: Option<u64>,
    pub shaders: ShaderPaths,
}

impl Default for PointFieldConfig {
    fn default() -> Self {
        Self {
            grid_size: 500,
            time_step: 0.05,
            point_size: 2.0,
            seed: None,
            shaders: ShaderPaths::default(),
        }
    }
}
