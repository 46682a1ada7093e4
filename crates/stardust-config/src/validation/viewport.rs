//! Viewport and camera validation.

use stardust_common::Color;

use crate::schema::StardustConfig;

use super::helpers::{validate_finite3, validate_range, validate_range_f64};

pub(crate) fn validate_viewport(errors: &mut Vec<String>, config: &StardustConfig) {
    let vp = &config.viewport;

    if Color::from_hex(&vp.clear_color).is_none() {
        errors.push(format!(
            "viewport.clear_color = {:?} is not a #rrggbb color",
            vp.clear_color
        ));
    }

    validate_range(errors, "viewport.width", vp.width, 1, 16384);
    validate_range(errors, "viewport.height", vp.height, 1, 16384);
    validate_range_f64(errors, "viewport.fov", vp.fov as f64, 1.0, 179.0);

    if !(vp.near > 0.0 && vp.near.is_finite()) {
        errors.push(format!("viewport.near = {} must be positive", vp.near));
    } else if !(vp.far > vp.near && vp.far.is_finite()) {
        errors.push(format!(
            "viewport.near = {} must be less than viewport.far = {}",
            vp.near, vp.far
        ));
    }

    validate_finite3(errors, "viewport.camera_position", vp.camera_position);
    validate_finite3(errors, "viewport.look_at", vp.look_at);
    if vp.camera_position == vp.look_at {
        errors.push("viewport.camera_position must differ from viewport.look_at".into());
    }

    if vp.msaa_samples != 1 && vp.msaa_samples != 4 {
        errors.push(format!(
            "viewport.msaa_samples = {} must be 1 or 4",
            vp.msaa_samples
        ));
    }
}
