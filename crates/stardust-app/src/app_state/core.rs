//! StardustApp struct definition and constructor.

use std::process::ExitCode;
use std::sync::Arc;

use winit::window::Window;

use stardust_config::StardustConfig;
use stardust_renderer::{PointField, Viewport, WgpuBackend};

use crate::frame_loop::FrameLoop;

/// Top-level application state.
pub struct StardustApp {
    pub(super) config: StardustConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) viewport: Option<Viewport<WgpuBackend>>,
    pub(super) field: Option<PointField>,

    pub(super) frame_loop: FrameLoop,

    // Last cursor position, in physical pixels. Button events carry none.
    pub(super) cursor: (f64, f64),

    // Set when initialization or a frame failed.
    pub(super) failed: bool,
}

impl StardustApp {
    pub fn new(config: StardustConfig, frame_limit: Option<u64>) -> Self {
        Self {
            config,
            window: None,
            viewport: None,
            field: None,
            frame_loop: FrameLoop::new(frame_limit),
            cursor: (0.0, 0.0),
            failed: false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
