//! Translate winit pointer events into orbit-control input.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use stardust_renderer::{ControlInput, PointerButton};

/// Pixels scrolled per wheel line, for devices that report lines.
const LINE_HEIGHT_PX: f64 = 40.0;

pub(super) fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Button press or release at the last known cursor position.
pub(super) fn button_input(
    state: ElementState,
    button: MouseButton,
    cursor: (f64, f64),
) -> Option<ControlInput> {
    let button = pointer_button(button)?;
    Some(match state {
        ElementState::Pressed => ControlInput::PointerDown {
            button,
            x: cursor.0,
            y: cursor.1,
        },
        ElementState::Released => ControlInput::PointerUp { button },
    })
}

/// winit reports scrolling away from the user as positive; the controls
/// expect that as negative (zoom in).
pub(super) fn wheel_input(delta: MouseScrollDelta) -> ControlInput {
    let delta_y = match delta {
        MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y,
    };
    ControlInput::Wheel { delta_y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(pointer_button(MouseButton::Left), Some(PointerButton::Primary));
        assert_eq!(pointer_button(MouseButton::Right), Some(PointerButton::Secondary));
        assert_eq!(pointer_button(MouseButton::Middle), Some(PointerButton::Middle));
        assert_eq!(pointer_button(MouseButton::Back), None);
    }

    #[test]
    fn press_uses_cursor_position() {
        let input = button_input(ElementState::Pressed, MouseButton::Left, (12.0, 34.0));
        assert_eq!(
            input,
            Some(ControlInput::PointerDown {
                button: PointerButton::Primary,
                x: 12.0,
                y: 34.0,
            })
        );
    }

    #[test]
    fn release_maps_to_pointer_up() {
        let input = button_input(ElementState::Released, MouseButton::Right, (0.0, 0.0));
        assert_eq!(
            input,
            Some(ControlInput::PointerUp {
                button: PointerButton::Secondary
            })
        );
    }

    #[test]
    fn scroll_up_zooms_in() {
        match wheel_input(MouseScrollDelta::LineDelta(0.0, 1.0)) {
            ControlInput::Wheel { delta_y } => assert!(delta_y < 0.0),
            other => panic!("unexpected {other:?}"),
        }
        match wheel_input(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -15.0))) {
            ControlInput::Wheel { delta_y } => assert!((delta_y - 15.0).abs() < f64::EPSILON),
            other => panic!("unexpected {other:?}"),
        }
    }
}
