//! Stardust configuration system.
//!
//! Every tunable has a compiled-in default. An optional TOML file can
//! override any subset of fields; the result is always validated.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stardust_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("defaults always validate");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::StardustConfig;

use std::path::Path;

use stardust_common::ConfigError;

/// Load the effective config: the file at `path` if given, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<StardustConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => {
            let config = StardustConfig::default();
            validation::validate(&config)?;
            Ok(config)
        }
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &StardustConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
