//! Error types for the CLI

use pocketcalc::core::keymap::UnknownKey;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Key that is not recognised or does nothing on the calculator
    #[error("Invalid key: {key:?}")]
    InvalidKey {
        /// The offending key text
        key: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid key error
    #[must_use]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}

impl From<UnknownKey> for CliError {
    fn from(err: UnknownKey) -> Self {
        Self::invalid_key(err.0)
    }
}

impl From<serde_yaml_ng::Error> for CliError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_invalid_key_error() {
        let err = CliError::invalid_key("q");
        assert_eq!(err.to_string(), "Invalid key: \"q\"");
    }

    #[test]
    fn test_unknown_key_from() {
        let err: CliError = UnknownKey("Tab".to_string()).into();
        assert!(matches!(err, CliError::InvalidKey { ref key } if key == "Tab"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_yaml_error_is_config() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[").unwrap_err();
        let cli_err: CliError = yaml_err.into();
        assert!(matches!(cli_err, CliError::Config { .. }));
    }
}
