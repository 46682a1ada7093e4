//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod controls;
mod helpers;
mod point_field;
mod viewport;


use stardust_common::ConfigError;

use crate::schema::StardustConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StardustConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    viewport::validate_viewport(&mut errors, config);
    controls::validate_controls(&mut errors, config);
    point_field::validate_point_field(&mut errors, config);

    if config.logging.filter.trim().is_empty() {
        errors.push("logging.filter must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
