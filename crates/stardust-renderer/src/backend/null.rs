//! Backend that draws nothing.

use stardust_common::Color;

use super::RenderBackend;
use crate::camera::PerspectiveCamera;
use crate::gpu::{PhysicalSize, RendererError};
use crate::math::Mat4;
use crate::scene::Scene;

/// Records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct NullBackend {
    pub frames: u64,
    pub size: Option<PhysicalSize>,
    pub pixel_ratio: f64,
    pub clear_color: Color,
    /// Objects submitted with the last frame.
    pub last_object_count: usize,
    /// Point count summed over the last frame's objects.
    pub last_point_count: usize,
    /// Camera view-projection of the last frame.
    pub last_view_projection: Option<Mat4>,
    /// Time uniform values of the last frame's objects.
    pub last_times: Vec<f32>,
    /// Objects seen by the last `prepare`.
    pub prepared_objects: usize,
    /// Make `prepare` fail as a shader compiler would.
    pub reject_shaders: bool,
}

impl NullBackend {
    pub fn new() -> Self {
        Self {
            pixel_ratio: 1.0,
            ..Default::default()
        }
    }
}

impl RenderBackend for NullBackend {
    fn resize(&mut self, width: u32, height: u32, pixel_ratio: f64) -> Result<(), RendererError> {
        self.size = Some(
            PhysicalSize::new(width, height).ok_or(RendererError::InvalidSize { width, height })?,
        );
        self.pixel_ratio = pixel_ratio;
        Ok(())
    }

    fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn prepare(&mut self, scene: &Scene) -> Result<(), RendererError> {
        if self.reject_shaders {
            return Err(RendererError::ShaderCompilation(
                "shaders rejected by null backend".into(),
            ));
        }
        self.prepared_objects = scene.len();
        Ok(())
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RendererError> {
        if self.size.is_none() {
            return Err(RendererError::NotInitialized("null backend"));
        }
        self.frames += 1;
        self.last_object_count = scene.len();
        self.last_point_count = scene.iter().map(|(_, p)| p.geometry.vertex_count()).sum();
        self.last_times = scene
            .iter()
            .map(|(_, p)| p.material.time.shader_value())
            .collect();
        self.last_view_projection = Some(camera.view_projection());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
