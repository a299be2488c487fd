use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be > 0"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }
}
