use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StardustError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("event loop error: {0}")]
    EventLoop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("point_field.grid_size = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: point_field.grid_size = 0"
        );
    }

    #[test]
    fn stardust_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: StardustError = config_err.into();
        assert!(matches!(err, StardustError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn stardust_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StardustError = io_err.into();
        assert!(matches!(err, StardustError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn stardust_error_string_variants() {
        let err = StardustError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = StardustError::EventLoop("already running".into());
        assert_eq!(err.to_string(), "event loop error: already running");
    }
}
