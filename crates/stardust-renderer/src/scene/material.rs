//! Shader-driven point material.

use super::uniform::TimeUniform;

/// How fragments combine with the color already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blending {
    /// `src * src_alpha + dst * (1 - src_alpha)`.
    Normal,
    /// `src * src_alpha + dst`. Overlapping points brighten.
    #[default]
    Additive,
}

/// Which primitive faces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Front,
    #[default]
    Double,
}

/// WGSL source for both stages. The text is opaque to everything but the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// A material whose look is defined entirely by its shaders and uniforms.
#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    pub label: String,
    pub shaders: ShaderSources,
    pub time: TimeUniform,
    /// Sprite diameter in logical pixels.
    pub point_size: f32,
    pub blending: Blending,
    pub side: Side,
    pub transparent: bool,
    pub depth_test: bool,
    pub depth_write: bool,
}

impl ShaderMaterial {
    /// Transparent, additive, depth-less material, as used for glowing
    /// point clouds.
    pub fn additive_points(
        label: impl Into<String>,
        shaders: ShaderSources,
        time: TimeUniform,
        point_size: f32,
    ) -> Self {
        Self {
            label: label.into(),
            shaders,
            time,
            point_size,
            blending: Blending::Additive,
            side: Side::Double,
            transparent: true,
            depth_test: false,
            depth_write: false,
        }
    }
}
