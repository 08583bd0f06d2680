use std::path::PathBuf;

/// Raised by the clock when the remaining decision time drops below the threshold.
///
/// Unwinds the whole in-flight search through `?`; only the agents catch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search timed out")]
pub struct SearchTimeout;

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
    fn test_search_timeout_display() {
        assert_eq!(SearchTimeout.to_string(), "search timed out");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("agent.timeout must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: agent.timeout must be > 0");
    }
}
