//! Material uniforms shared between their writer and the renderer.

use std::cell::Cell;
use std::rc::Rc;

/// The scalar `time` uniform.
///
/// Clones share one value: the point field writes it once per frame and the
/// renderer reads it when uploading the frame's uniform block. Accumulates
/// in `f64` so long sessions don't drift; narrowed to `f32` for the GPU.
#[derive(Debug, Clone, Default)]
pub struct TimeUniform(Rc<Cell<f64>>);

impl TimeUniform {
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Add `step` and return the new value.
    pub fn advance(&self, step: f64) -> f64 {
        let value = self.0.get() + step;
        self.0.set(value);
        value
    }

    /// Value as uploaded to the shader.
    pub fn shader_value(&self) -> f32 {
        self.0.get() as f32
    }
}
