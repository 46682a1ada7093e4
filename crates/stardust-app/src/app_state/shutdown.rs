//! Graceful shutdown: stop the frame loop and release GPU resources.

use super::core::StardustApp;

impl StardustApp {
    /// Stop rendering and drop the viewport (and with it the surface)
    /// before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!(
            "Initiating shutdown after {} frames",
            self.frame_loop.frames()
        );
        self.frame_loop.stop_token().cancel();
        self.field = None;
        self.viewport = None;
        self.window = None;
    }
}
