//! Windowless run: the full frame pipeline against the null backend.

use stardust_common::StardustError;
use stardust_config::StardustConfig;
use stardust_renderer::point_field::rng_from_seed;
use stardust_renderer::{NullBackend, PointField, Viewport};

use crate::frame_loop::{FrameLoop, LoopControl};

/// Frames rendered when no `--frames` limit is given.
pub const DEFAULT_FRAMES: u64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub points: usize,
    pub time: f64,
}

pub fn run(config: &StardustConfig, frames: Option<u64>) -> Result<HeadlessReport, StardustError> {
    let limit = frames.unwrap_or(DEFAULT_FRAMES);

    let mut viewport = Viewport::new(config.viewport.clone(), config.controls.clone());
    viewport.initialize(NullBackend::new())?;

    let mut field = PointField::new(config.point_field.clone());
    field.initialize(&mut viewport, &mut rng_from_seed(config.point_field.seed))?;

    let mut frame_loop = FrameLoop::new(Some(limit));
    while frame_loop.tick(&mut viewport, &field)? == LoopControl::Continue {}

    let points = viewport
        .backend()
        .map(|backend| backend.last_point_count)
        .unwrap_or_default();
    let report = HeadlessReport {
        frames: frame_loop.frames(),
        points,
        time: field.time(),
    };
    tracing::info!(
        "Headless run finished: {} frames, {} points, time={:.2}",
        report.frames,
        report.points,
        report.time,
    );
    Ok(report)
}
