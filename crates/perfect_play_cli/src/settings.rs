//! Loading selector settings from disk.

use derive_more::{Display, Error};
use perfect_play::SelectorConfig;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Loads a selector configuration from a TOML file.
///
/// Missing keys fall back to the defaults: opening book on, pruning off,
/// seeded from entropy.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<SelectorConfig, ConfigError> {
    debug!("Loading config from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

    let config = parse(&content)?;
    info!(
        opening_book = config.opening_book(),
        pruning = config.pruning(),
        seed = ?config.seed(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Parses a selector configuration from TOML text.
#[instrument(skip(content))]
pub fn parse(content: &str) -> Result<SelectorConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, SelectorConfig::default());
        assert!(*config.opening_book());
    }

    #[test]
    fn test_all_keys() {
        let config = parse("opening_book = false\npruning = true\nseed = 42\n").unwrap();
        assert!(!*config.opening_book());
        assert!(*config.pruning());
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_bad_type_is_reported() {
        let err = parse("pruning = \"yes\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
