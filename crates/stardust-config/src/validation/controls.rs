//! Orbit control validation.

use std::f32::consts::PI;

use crate::schema::StardustConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &StardustConfig) {
    let c = &config.controls;

    if !(c.damping_factor > 0.0 && c.damping_factor <= 1.0) {
        errors.push(format!(
            "controls.damping_factor = {} is out of range (0, 1]",
            c.damping_factor
        ));
    }

    validate_range_f64(errors, "controls.rotate_speed", c.rotate_speed as f64, 0.0, 10.0);
    validate_range_f64(errors, "controls.zoom_speed", c.zoom_speed as f64, 0.0, 10.0);
    validate_range_f64(errors, "controls.pan_speed", c.pan_speed as f64, 0.0, 10.0);

    if !(c.min_distance >= 0.0 && c.min_distance <= c.max_distance) {
        errors.push(format!(
            "controls.min_distance = {} must be within [0, controls.max_distance = {}]",
            c.min_distance, c.max_distance
        ));
    }

    validate_range_f64(
        errors,
        "controls.min_polar_angle",
        c.min_polar_angle as f64,
        0.0,
        PI as f64,
    );
    validate_range_f64(
        errors,
        "controls.max_polar_angle",
        c.max_polar_angle as f64,
        0.0,
        PI as f64,
    );
    if c.min_polar_angle > c.max_polar_angle {
        errors.push("controls.min_polar_angle must not exceed controls.max_polar_angle".into());
    }
}
