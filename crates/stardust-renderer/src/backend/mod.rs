//! Render backends: the surface a [`Viewport`](crate::Viewport) draws into.
//!
//! `WgpuBackend` presents to a window; `NullBackend` only records what it was
//! asked to do, for tests and headless runs.

mod null;
mod points_pipeline;
mod wgpu_backend;

pub use self::null::NullBackend;
pub use self::points_pipeline::PointUniforms;
pub use self::wgpu_backend::WgpuBackend;

use stardust_common::Color;

use crate::camera::PerspectiveCamera;
use crate::gpu::RendererError;
use crate::scene::Scene;

/// Something that can draw a [`Scene`] through a camera.
pub trait RenderBackend {
    /// Resize the drawing surface. `width`/`height` are physical pixels and
    /// `pixel_ratio` converts logical sizes (such as point sizes) to them.
    fn resize(&mut self, width: u32, height: u32, pixel_ratio: f64) -> Result<(), RendererError>;

    fn set_clear_color(&mut self, color: Color);

    /// Build GPU resources for objects new to `scene`, compiling their
    /// shaders. Called once after objects are added so shader errors
    /// surface at setup instead of on the first frame.
    fn prepare(&mut self, scene: &Scene) -> Result<(), RendererError>;

    /// Clear the surface and draw every object of `scene`, in order.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RendererError>;
}
