//! wgpu pipeline that draws a [`Points`] object as instanced billboards.
//!
//! Each point is one instance of a 6-vertex quad; the vertex shader expands
//! the quad around the projected point by `point_size` physical pixels.

use wgpu::util::DeviceExt;

use crate::gpu::RendererError;
use crate::math::Mat4;
use crate::scene::{Blending, Points, Side};

/// GPU-side uniform block matching the WGSL `Uniforms` struct.
///
/// Layout: 16 + 4 × f32 = 80 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    /// Projection × view, column-major.
    pub view_proj: [f32; 16],
    pub time: f32,
    /// Sprite diameter in physical pixels.
    pub point_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl PointUniforms {
    pub fn new(view_proj: Mat4, time: f32, point_size: f32, width: u32, height: u32) -> Self {
        Self {
            view_proj,
            time,
            point_size,
            viewport_width: width as f32,
            viewport_height: height as f32,
        }
    }
}

const VERTICES_PER_POINT: u32 = 6;

/// Pipeline, instance buffer and uniforms for one scene object.
pub(crate) struct PointsPipeline {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PointsPipeline {
    /// Build the pipeline for `points`. Shader validation errors are caught
    /// and returned instead of reaching the device's uncaptured handler.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        points: &Points,
    ) -> Result<Self, RendererError> {
        let material = &points.material;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points vertex shader"),
            source: wgpu::ShaderSource::Wgsl(material.shaders.vertex.as_str().into()),
        });
        let fragment_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points fragment shader"),
            source: wgpu::ShaderSource::Wgsl(material.shaders.fragment.as_str().into()),
        });

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("points instances"),
            contents: bytemuck::cast_slice(points.geometry.position().data()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<PointUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("points bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(material.label.as_str()),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (3 * std::mem::size_of::<f32>()) as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    }],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(blend_state(material.blending)),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: cull_mode(material.side),
                ..Default::default()
            },
            // The surface has no depth attachment; depth_test/depth_write
            // materials draw in scene order.
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RendererError::ShaderCompilation(err.to_string()));
        }

        Ok(Self {
            pipeline,
            instance_buffer,
            instance_count: points.geometry.vertex_count() as u32,
            uniform_buffer,
            bind_group,
        })
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &PointUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..VERTICES_PER_POINT, 0..self.instance_count);
    }
}

pub(crate) fn blend_state(blending: Blending) -> wgpu::BlendState {
    match blending {
        Blending::Normal => wgpu::BlendState::ALPHA_BLENDING,
        Blending::Additive => {
            let add = wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            };
            wgpu::BlendState {
                color: add,
                alpha: add,
            }
        }
    }
}

pub(crate) fn cull_mode(side: Side) -> Option<wgpu::Face> {
    match side {
        Side::Front => Some(wgpu::Face::Back),
        Side::Double => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
