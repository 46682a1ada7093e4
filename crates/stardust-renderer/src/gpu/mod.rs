//! GPU context and the renderer error type.

mod context;
mod types;

pub use context::GpuContext;
pub use types::{PhysicalSize, RendererError, ShaderStage};

// ===== Tests =====
