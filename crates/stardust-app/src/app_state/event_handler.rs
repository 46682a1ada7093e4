//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use stardust_renderer::ControlInput;

use super::core::StardustApp;
use super::input::{button_input, wheel_input};
use crate::frame_loop::LoopControl;

impl ApplicationHandler for StardustApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Failed to initialize renderer: {e}");
            self.failed = true;
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the last real size.
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut viewport) = self.viewport {
                        if let Err(e) = viewport.on_resize(size.width, size.height) {
                            tracing::warn!("Resize failed: {e}");
                        }
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ref mut viewport) = self.viewport {
                    if let Err(e) = viewport.set_pixel_ratio(scale_factor) {
                        tracing::warn!("Scale factor change failed: {e}");
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                self.forward_input(ControlInput::PointerMove {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input) = button_input(state, button, self.cursor) {
                    self.forward_input(input);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.forward_input(wheel_input(delta));
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_stopped() {
            event_loop.exit();
            return;
        }
        // FIFO present paces this to the display refresh.
        self.request_redraw();
    }
}

impl StardustApp {
    fn forward_input(&mut self, input: ControlInput) {
        if let Some(ref mut viewport) = self.viewport {
            viewport.handle_input(input);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(viewport), Some(field)) = (self.viewport.as_mut(), self.field.as_ref()) else {
            return;
        };
        match self.frame_loop.tick(viewport, field) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Stop) => {
                tracing::info!("Frame loop stopped after {} frames", self.frame_loop.frames());
                self.shutdown();
                event_loop.exit();
            }
            Err(e) => {
                tracing::error!("Frame failed, stopping: {e}");
                self.failed = true;
                self.shutdown();
                event_loop.exit();
            }
        }
    }
}
