//! Per-frame driver: advance the point field, then render.

use std::cell::Cell;
use std::rc::Rc;

use stardust_renderer::{PointField, RenderBackend, RendererError, Viewport};

/// Cancels a [`FrameLoop`] from anywhere on the event-loop thread.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Runs frames until its token is cancelled or the frame limit is reached.
#[derive(Debug)]
pub struct FrameLoop {
    stop: StopToken,
    frame_limit: Option<u64>,
    frames: u64,
}

impl FrameLoop {
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            stop: StopToken::default(),
            frame_limit,
            frames: 0,
        }
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_cancelled() || self.frame_limit.is_some_and(|limit| self.frames >= limit)
    }

    /// Run one frame. A failed frame is returned as-is; the caller decides
    /// whether to stop.
    pub fn tick<B: RenderBackend>(
        &mut self,
        viewport: &mut Viewport<B>,
        field: &PointField,
    ) -> Result<LoopControl, RendererError> {
        if self.is_stopped() {
            return Ok(LoopControl::Stop);
        }
        field.advance_frame();
        viewport.render_frame()?;
        self.frames += 1;
        Ok(LoopControl::Continue)
    }
}

// =============================================================================
// Tests
// =============================================================================
