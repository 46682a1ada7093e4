//! Shader source resolution: built-in WGSL or files named in the config.

use std::path::Path;

use stardust_config::schema::ShaderPaths;

use crate::gpu::{RendererError, ShaderStage};
use crate::scene::ShaderSources;

pub const BUILTIN_VERTEX: &str = include_str!("../shaders/points.vert.wgsl");
pub const BUILTIN_FRAGMENT: &str = include_str!("../shaders/points.frag.wgsl");

/// Load both stages. A configured file that can't be read is an error;
/// there is no fallback to the built-in source.
pub fn resolve_shaders(paths: &ShaderPaths) -> Result<ShaderSources, RendererError> {
    Ok(ShaderSources {
        vertex: load_stage(ShaderStage::Vertex, paths.vertex.as_deref(), BUILTIN_VERTEX)?,
        fragment: load_stage(
            ShaderStage::Fragment,
            paths.fragment.as_deref(),
            BUILTIN_FRAGMENT,
        )?,
    })
}

fn load_stage(
    stage: ShaderStage,
    path: Option<&Path>,
    builtin: &str,
) -> Result<String, RendererError> {
    let Some(path) = path else {
        tracing::debug!("Using built-in {stage} shader");
        return Ok(builtin.to_string());
    };

    let source_error = |reason: String| RendererError::ShaderSource {
        stage,
        path: path.to_path_buf(),
        reason,
    };

    let source = std::fs::read_to_string(path).map_err(|e| source_error(e.to_string()))?;
    if source.trim().is_empty() {
        return Err(source_error("file is empty".into()));
    }
    tracing::info!("Loaded {stage} shader from {}", path.display());
    Ok(source)
}
