//! Orbit controls: rotate, dolly and pan a camera around a target.
//!
//! Input accumulates into a pending delta. [`OrbitControls::update`] applies
//! it to the camera once per frame. With damping enabled only
//! `damping_factor` of the pending delta is applied per update and the rest
//! decays geometrically, so the camera keeps gliding after input stops.

use std::f32::consts::PI;

use stardust_config::schema::OrbitControlsConfig;

use crate::camera::PerspectiveCamera;
use crate::math::vec3::{self, Vec3};

use super::input::{ControlInput, PointerButton};
use super::spherical::Spherical;

/// Per-update change below which the camera counts as settled.
const SETTLE_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Pan,
    Dolly,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    mode: DragMode,
    button: PointerButton,
    last: (f64, f64),
}

pub struct OrbitControls {
    config: OrbitControlsConfig,
    target: Vec3,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
    drag: Option<Drag>,
}

impl OrbitControls {
    /// Bind controls to the camera's current target.
    ///
    /// Inverted or NaN distance and polar limits are repaired here so the
    /// per-frame clamps always see `min <= max`.
    pub fn new(config: &OrbitControlsConfig, camera: &PerspectiveCamera) -> Self {
        let defaults = OrbitControlsConfig::default();
        let mut config = config.clone();
        (config.min_distance, config.max_distance) = ordered_limits(
            "distance",
            (config.min_distance, config.max_distance),
            (defaults.min_distance, defaults.max_distance),
        );
        (config.min_polar_angle, config.max_polar_angle) = ordered_limits(
            "polar angle",
            (config.min_polar_angle, config.max_polar_angle),
            (defaults.min_polar_angle, defaults.max_polar_angle),
        );
        Self {
            config,
            target: camera.target,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: [0.0; 3],
            drag: None,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn damping_enabled(&self) -> bool {
        self.config.enable_damping
    }

    /// Feed one pointer event. `viewport_height` is the surface height in
    /// the same pixel units as the event coordinates.
    pub fn handle_input(
        &mut self,
        input: ControlInput,
        camera: &PerspectiveCamera,
        viewport_height: f32,
    ) {
        let height = viewport_height.max(1.0);
        match input {
            ControlInput::PointerDown { button, x, y } => {
                let mode = match button {
                    PointerButton::Primary => Some(DragMode::Rotate),
                    PointerButton::Secondary if self.config.enable_pan => Some(DragMode::Pan),
                    PointerButton::Middle if self.config.enable_zoom => Some(DragMode::Dolly),
                    _ => None,
                };
                self.drag = mode.map(|mode| Drag {
                    mode,
                    button,
                    last: (x, y),
                });
            }
            ControlInput::PointerMove { x, y } => {
                let Some(drag) = self.drag.as_mut() else {
                    return;
                };
                let dx = (x - drag.last.0) as f32;
                let dy = (y - drag.last.1) as f32;
                drag.last = (x, y);
                let mode = drag.mode;
                match mode {
                    DragMode::Rotate => {
                        let speed = self.config.rotate_speed;
                        self.rotate_left(2.0 * PI * dx / height * speed);
                        self.rotate_up(2.0 * PI * dy / height * speed);
                    }
                    DragMode::Pan => self.pan(dx, dy, camera, height),
                    DragMode::Dolly => {
                        if dy > 0.0 {
                            self.dolly_out(self.zoom_scale());
                        } else if dy < 0.0 {
                            self.dolly_in(self.zoom_scale());
                        }
                    }
                }
            }
            ControlInput::PointerUp { button } => {
                if self.drag.is_some_and(|d| d.button == button) {
                    self.drag = None;
                }
            }
            ControlInput::Wheel { delta_y } => {
                if !self.config.enable_zoom {
                    return;
                }
                if delta_y < 0.0 {
                    self.dolly_in(self.zoom_scale());
                } else if delta_y > 0.0 {
                    self.dolly_out(self.zoom_scale());
                }
            }
        }
    }

    /// Apply one step of pending motion to the camera.
    ///
    /// Returns `true` while the camera is still moving.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = vec3::sub(camera.position, self.target);
        let mut spherical = Spherical::from_offset(offset);

        let step = if self.config.enable_damping {
            self.config.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.delta_theta * step;
        spherical.phi += self.delta_phi * step;
        spherical.phi = spherical
            .phi
            .clamp(self.config.min_polar_angle, self.config.max_polar_angle);
        spherical.make_safe();
        spherical.radius = (spherical.radius * self.scale)
            .clamp(self.config.min_distance, self.config.max_distance);

        let pan_step = vec3::scale(self.pan_offset, step);
        self.target = vec3::add(self.target, pan_step);

        let previous = camera.position;
        camera.position = vec3::add(self.target, spherical.to_offset());
        camera.look_at(self.target);

        if self.config.enable_damping {
            let decay = 1.0 - self.config.damping_factor;
            self.delta_theta *= decay;
            self.delta_phi *= decay;
            self.pan_offset = vec3::scale(self.pan_offset, decay);
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = [0.0; 3];
        }
        self.scale = 1.0;

        vec3::length(vec3::sub(camera.position, previous)) > SETTLE_EPSILON
            || vec3::length(pan_step) > SETTLE_EPSILON
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    pub fn dolly_in(&mut self, dolly_scale: f32) {
        self.scale *= dolly_scale;
    }

    pub fn dolly_out(&mut self, dolly_scale: f32) {
        self.scale /= dolly_scale;
    }

    fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.config.zoom_speed)
    }

    /// Screen-space pan: a drag across the full surface height moves the
    /// target by the visible height at the target's distance.
    fn pan(&mut self, dx: f32, dy: f32, camera: &PerspectiveCamera, height: f32) {
        let speed = self.config.pan_speed;
        let target_distance = camera.distance() * (camera.fov.to_radians() * 0.5).tan();
        let (right, up) = camera.basis();

        let left = vec3::scale(right, -2.0 * dx * speed * target_distance / height);
        let upward = vec3::scale(up, 2.0 * dy * speed * target_distance / height);
        self.pan_offset = vec3::add(self.pan_offset, vec3::add(left, upward));
    }
}

fn ordered_limits(name: &str, (min, max): (f32, f32), fallback: (f32, f32)) -> (f32, f32) {
    if min.is_nan() || max.is_nan() {
        tracing::warn!("Orbit {name} limits ({min}, {max}) are NaN, using defaults");
        return fallback;
    }
    if min > max {
        tracing::warn!("Orbit {name} limits ({min}, {max}) are inverted, swapping");
        return (max, min);
    }
    (min, max)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stardust_config::schema::ViewportConfig;

    fn side_camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(70.0, 1.0, 0.01, 1000.0);
        camera.position = [0.0, 0.0, 2.0];
        camera.look_at([0.0, 0.0, 0.0]);
        camera
    }

    fn controls(damping: bool) -> OrbitControls {
        let config = OrbitControlsConfig {
            enable_damping: damping,
            ..OrbitControlsConfig::default()
        };
        OrbitControls::new(&config, &side_camera())
    }

    fn moved(a: Vec3, b: Vec3) -> f32 {
        vec3::length(vec3::sub(a, b))
    }

    #[test]
    fn update_without_input_keeps_camera() {
        let mut camera = side_camera();
        let mut c = controls(true);
        let before = camera.position;
        assert!(!c.update(&mut camera));
        assert!(moved(before, camera.position) < 1e-5);
    }

    #[test]
    fn damping_keeps_moving_with_decreasing_steps() {
        let mut camera = side_camera();
        let mut c = controls(true);
        c.rotate_left(0.5);

        let mut last = camera.position;
        let mut steps = Vec::new();
        for _ in 0..5 {
            assert!(c.update(&mut camera));
            steps.push(moved(last, camera.position));
            last = camera.position;
        }
        for pair in steps.windows(2) {
            assert!(pair[1] < pair[0], "steps should shrink: {steps:?}");
            assert!(pair[1] > 0.0);
        }
    }

    #[test]
    fn damping_converges_to_full_rotation() {
        let mut camera = side_camera();
        let mut c = controls(true);
        c.rotate_left(0.5);
        for _ in 0..2000 {
            c.update(&mut camera);
        }
        let s = Spherical::from_offset(camera.position);
        assert!((s.theta + 0.5).abs() < 1e-3, "theta = {}", s.theta);
        assert!((s.radius - 2.0).abs() < 1e-4);
    }

    #[test]
    fn without_damping_motion_applies_in_one_update() {
        let mut camera = side_camera();
        let mut c = controls(false);
        c.rotate_left(0.5);

        assert!(c.update(&mut camera));
        let s = Spherical::from_offset(camera.position);
        assert!((s.theta + 0.5).abs() < 1e-5);

        let after_first = camera.position;
        assert!(!c.update(&mut camera));
        assert!(moved(after_first, camera.position) < 1e-5);
    }

    #[test]
    fn drag_rotates_camera() {
        let mut camera = side_camera();
        let mut c = controls(false);
        c.handle_input(
            ControlInput::PointerDown {
                button: PointerButton::Primary,
                x: 100.0,
                y: 100.0,
            },
            &camera,
            600.0,
        );
        c.handle_input(ControlInput::PointerMove { x: 250.0, y: 100.0 }, &camera, 600.0);
        c.handle_input(
            ControlInput::PointerUp {
                button: PointerButton::Primary,
            },
            &camera,
            600.0,
        );

        c.update(&mut camera);
        let s = Spherical::from_offset(camera.position);
        let expected = -2.0 * PI * 150.0 / 600.0;
        assert!((s.theta - expected).abs() < 1e-4);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut camera = side_camera();
        let mut c = controls(false);
        c.handle_input(ControlInput::PointerMove { x: 500.0, y: 10.0 }, &camera, 600.0);
        assert!(!c.update(&mut camera));
    }

    #[test]
    fn wheel_dolly_in_and_out() {
        let mut camera = side_camera();
        let mut c = controls(false);

        c.handle_input(ControlInput::Wheel { delta_y: -1.0 }, &camera, 600.0);
        c.update(&mut camera);
        assert!((camera.distance() - 2.0 * 0.95).abs() < 1e-5);

        c.handle_input(ControlInput::Wheel { delta_y: 1.0 }, &camera, 600.0);
        c.update(&mut camera);
        assert!((camera.distance() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_disabled_ignores_wheel() {
        let mut camera = side_camera();
        let config = OrbitControlsConfig {
            enable_damping: false,
            enable_zoom: false,
            ..OrbitControlsConfig::default()
        };
        let mut c = OrbitControls::new(&config, &camera);
        c.handle_input(ControlInput::Wheel { delta_y: -1.0 }, &camera, 600.0);
        c.update(&mut camera);
        assert!((camera.distance() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_clamped() {
        let mut camera = side_camera();
        let config = OrbitControlsConfig {
            enable_damping: false,
            max_distance: 2.5,
            ..OrbitControlsConfig::default()
        };
        let mut c = OrbitControls::new(&config, &camera);
        for _ in 0..20 {
            c.dolly_out(0.95);
        }
        c.update(&mut camera);
        assert!((camera.distance() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut camera = side_camera();
        let config = OrbitControlsConfig {
            enable_damping: false,
            min_polar_angle: 1.0,
            ..OrbitControlsConfig::default()
        };
        let mut c = OrbitControls::new(&config, &camera);
        c.rotate_up(3.0);
        c.update(&mut camera);
        let s = Spherical::from_offset(camera.position);
        assert!((s.phi - 1.0).abs() < 1e-5);
    }

    #[test]
    fn inverted_polar_limits_are_swapped() {
        let mut camera = side_camera();
        let config = OrbitControlsConfig {
            enable_damping: false,
            min_polar_angle: 2.0,
            max_polar_angle: 1.0,
            ..OrbitControlsConfig::default()
        };
        let mut c = OrbitControls::new(&config, &camera);
        c.rotate_up(3.0);
        c.update(&mut camera);
        let s = Spherical::from_offset(camera.position);
        assert!((s.phi - 1.0).abs() < 1e-5);
    }

    #[test]
    fn nan_distance_limits_fall_back_to_defaults() {
        let mut camera = side_camera();
        let config = OrbitControlsConfig {
            min_distance: f32::NAN,
            ..OrbitControlsConfig::default()
        };
        let mut c = OrbitControls::new(&config, &camera);
        c.dolly_in(0.5);
        c.update(&mut camera);
        assert!(camera.position.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn right_drag_pans_target() {
        let mut camera = side_camera();
        let mut c = controls(false);
        c.handle_input(
            ControlInput::PointerDown {
                button: PointerButton::Secondary,
                x: 0.0,
                y: 0.0,
            },
            &camera,
            600.0,
        );
        c.handle_input(ControlInput::PointerMove { x: 60.0, y: 0.0 }, &camera, 600.0);
        c.update(&mut camera);

        // Dragging right moves the target left (-X for a camera on +Z).
        assert!(c.target()[0] < 0.0);
        assert!(c.target()[1].abs() < 1e-6);
        assert_eq!(camera.target, c.target());
        assert!((camera.distance() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn default_view_survives_update() {
        let viewport = ViewportConfig::default();
        let mut camera = PerspectiveCamera::from_config(&viewport, 800, 600);
        let mut c = OrbitControls::new(&OrbitControlsConfig::default(), &camera);
        c.update(&mut camera);
        assert!(camera.position.iter().all(|v| v.is_finite()));
        assert!((camera.distance() - (1.0f32 + 0.0025).sqrt()).abs() < 1e-4);
    }
}
