//! Point field validation.

use crate::schema::StardustConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_point_field(errors: &mut Vec<String>, config: &StardustConfig) {
    let pf = &config.point_field;

    validate_range(errors, "point_field.grid_size", pf.grid_size, 1, 4096);
    validate_range_f64(errors, "point_field.time_step", pf.time_step, 0.0, 1.0e3);
    if pf.time_step == 0.0 {
        errors.push("point_field.time_step must be positive".into());
    }

    if !(pf.point_size > 0.0 && pf.point_size <= 64.0) {
        errors.push(format!(
            "point_field.point_size = {} is out of range (0, 64]",
            pf.point_size
        ));
    }
}
