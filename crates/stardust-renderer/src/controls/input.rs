//! Windowing-agnostic pointer input consumed by the orbit controls.

/// Pointer buttons the controls react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Rotate around the target.
    Primary,
    /// Pan the target in screen space.
    Secondary,
    /// Dolly toward or away from the target.
    Middle,
}

/// One pointer event, in physical pixels relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    PointerDown { button: PointerButton, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { button: PointerButton },
    /// Positive `delta_y` scrolls toward the user and zooms out.
    Wheel { delta_y: f64 },
}
