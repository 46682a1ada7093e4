//! Core TOML config loading: parse a string or read a file.

use std::path::Path;

use stardust_common::ConfigError;
use tracing::info;

use crate::schema::StardustConfig;
use crate::validation;

/// Parse and validate a TOML document.
///
/// Missing fields are filled from defaults; out-of-range values are
/// rejected with a `ValidationError` listing every violation.
pub fn load_from_str(content: &str) -> Result<StardustConfig, ConfigError> {
    let config: StardustConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<StardustConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
