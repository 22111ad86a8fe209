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
pub enum RectkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
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

        let err = ConfigError::ValidationError("window.width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width = 0 is out of range"
        );
    }

    #[test]
    fn rectkit_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: RectkitError = config_err.into();
        assert!(matches!(err, RectkitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn rectkit_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "atlas.png missing");
        let err: RectkitError = io_err.into();
        assert!(matches!(err, RectkitError::Io(_)));
        assert!(err.to_string().contains("atlas.png missing"));
    }

    #[test]
    fn rectkit_error_other_variants() {
        let err = RectkitError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "renderer error: no adapter");

        let err = RectkitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
