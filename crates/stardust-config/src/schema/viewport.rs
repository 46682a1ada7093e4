//! Viewport, camera, and render-surface configuration.

use serde::{Deserialize, Serialize};

/// Render target and camera settings.
///
/// `width`/`height` are only the initial surface size; the live values
/// follow window resize events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Window title.
    pub title: String,
    /// Background clear color as `#rrggbb`.
    pub clear_color: String,
    /// Initial render target width in physical pixels.
    pub width: u32,
    /// Initial render target height in physical pixels.
    pub height: u32,
    /// Vertical field of view in degrees (valid range: 1-179).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Initial camera position in world space.
    pub camera_position: [f32; 3],
    /// Point the camera (and the orbit pivot) looks at.
    pub look_at: [f32; 3],
    /// Multisample count: 1 (off) or 4.
    pub msaa_samples: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            title: "Stardust".into(),
            clear_color: "#000000".into(),
            width: 1280,
            height: 800,
            fov: 70.0,
            near: 0.01,
            far: 1000.0,
            camera_position: [0.0, -1.0, -0.05],
            look_at: [0.0, 0.0, 0.0],
            msaa_samples: 4,
        }
    }
}
