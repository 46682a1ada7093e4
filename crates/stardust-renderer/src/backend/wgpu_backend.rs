//! Window-presenting backend built on wgpu.

use std::collections::HashMap;
use std::sync::Arc;

use stardust_common::Color;
use stardust_config::schema::ViewportConfig;
use winit::window::Window;

use super::points_pipeline::{PointUniforms, PointsPipeline};
use super::RenderBackend;
use crate::camera::PerspectiveCamera;
use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::scene::{ObjectId, Scene};

/// Draws scenes into a window surface.
///
/// One pipeline per scene object, built by `prepare` (or on the first frame
/// that sees the object); pipelines of removed objects are dropped.
pub struct WgpuBackend {
    gpu: GpuContext,
    clear_color: wgpu::Color,
    pixel_ratio: f64,
    /// Multisampled color target resolved into the surface texture.
    msaa_view: Option<wgpu::TextureView>,
    pipelines: HashMap<ObjectId, PointsPipeline>,
}

impl WgpuBackend {
    /// Acquire adapter, device and surface for `window`.
    pub async fn new(window: Arc<Window>, config: &ViewportConfig) -> Result<Self, RendererError> {
        let pixel_ratio = window.scale_factor();
        let gpu = GpuContext::new(window, config.msaa_samples).await?;
        let msaa_view = create_msaa_view(&gpu);
        Ok(Self {
            gpu,
            clear_color: wgpu::Color::BLACK,
            pixel_ratio,
            msaa_view,
            pipelines: HashMap::new(),
        })
    }

    pub fn sample_count(&self) -> u32 {
        self.gpu.sample_count
    }

    fn build_pipelines(&mut self, scene: &Scene) -> Result<(), RendererError> {
        self.pipelines.retain(|id, _| scene.contains(*id));
        for (id, points) in scene.iter() {
            if self.pipelines.contains_key(&id) {
                continue;
            }
            let pipeline = PointsPipeline::new(
                &self.gpu.device,
                self.gpu.format(),
                self.gpu.sample_count,
                points,
            )?;
            tracing::debug!(
                "Built points pipeline for {id} ({} points)",
                points.geometry.vertex_count()
            );
            self.pipelines.insert(id, pipeline);
        }
        Ok(())
    }
}

impl RenderBackend for WgpuBackend {
    fn resize(&mut self, width: u32, height: u32, pixel_ratio: f64) -> Result<(), RendererError> {
        if width == 0 || height == 0 {
            return Err(RendererError::InvalidSize { width, height });
        }
        self.pixel_ratio = pixel_ratio;
        if self.gpu.size != (PhysicalSize { width, height }) {
            self.gpu.resize(width, height);
            self.msaa_view = create_msaa_view(&self.gpu);
        }
        Ok(())
    }

    fn set_clear_color(&mut self, color: Color) {
        let [r, g, b] = color.to_linear();
        self.clear_color = wgpu::Color { r, g, b, a: 1.0 };
    }

    fn prepare(&mut self, scene: &Scene) -> Result<(), RendererError> {
        self.build_pipelines(scene)
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RendererError> {
        // Picks up objects added since the last prepare().
        self.build_pipelines(scene)?;

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let PhysicalSize { width, height } = self.gpu.size;
        let view_proj = camera.view_projection();
        for (id, points) in scene.iter() {
            if let Some(pipeline) = self.pipelines.get(&id) {
                let uniforms = PointUniforms::new(
                    view_proj,
                    points.material.time.shader_value(),
                    points.material.point_size * self.pixel_ratio as f32,
                    width,
                    height,
                );
                pipeline.update_uniforms(&self.gpu.queue, &uniforms);
            }
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("stardust frame encoder"),
            });

        {
            let (target, resolve_target, store) = match &self.msaa_view {
                Some(msaa) => (msaa, Some(&view), wgpu::StoreOp::Discard),
                None => (&view, None, wgpu::StoreOp::Store),
            };
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stardust main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (id, _) in scene.iter() {
                if let Some(pipeline) = self.pipelines.get(&id) {
                    pipeline.draw(&mut pass);
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(width, height, self.gpu.format());

        Ok(())
    }
}

fn create_msaa_view(gpu: &GpuContext) -> Option<wgpu::TextureView> {
    if gpu.sample_count <= 1 {
        return None;
    }
    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("stardust msaa target"),
        size: wgpu::Extent3d {
            width: gpu.size.width,
            height: gpu.size.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: gpu.sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: gpu.format(),
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
