//! Configuration schema types for Stardust.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! The defaults are the compiled-in tunables; a config file only overrides.

mod controls;
mod logging;
mod point_field;
mod viewport;

pub use controls::*;
pub use logging::*;
pub use point_field::*;
pub use viewport::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StardustConfig {
    pub viewport: ViewportConfig,
    pub controls: OrbitControlsConfig,
    pub point_field: PointFieldConfig,
    pub logging: LoggingConfig,
}
