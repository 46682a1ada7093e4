//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use stardust_common::StardustError;
use stardust_renderer::point_field::rng_from_seed;
use stardust_renderer::{PointField, Viewport, WgpuBackend};

use super::core::StardustApp;

impl StardustApp {
    /// Create the window, acquire the GPU and set up viewport and point
    /// field. Nothing is kept unless every step succeeds.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), StardustError> {
        let vp_config = &self.config.viewport;
        let attrs = WindowAttributes::default()
            .with_title(vp_config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                vp_config.width,
                vp_config.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| StardustError::Renderer(format!("failed to create window: {e}")))?;

        let backend = pollster::block_on(WgpuBackend::new(window.clone(), vp_config))?;
        tracing::info!("Render surface ready (msaa={}x)", backend.sample_count());

        let mut viewport = Viewport::new(vp_config.clone(), self.config.controls.clone());
        viewport.set_pixel_ratio(window.scale_factor())?;
        let inner = window.inner_size();
        if inner.width > 0 && inner.height > 0 {
            viewport.on_resize(inner.width, inner.height)?;
        }
        viewport.initialize(backend)?;

        let mut field = PointField::new(self.config.point_field.clone());
        let mut rng = rng_from_seed(self.config.point_field.seed);
        field.initialize(&mut viewport, &mut rng)?;

        self.viewport = Some(viewport);
        self.field = Some(field);
        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        Ok(())
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
