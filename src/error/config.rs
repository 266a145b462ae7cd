//! Errors raised while loading or validating [`Settings`](crate::config::Settings).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building settings from their sources.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested settings file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The settings file extension is neither `.toml` nor `.json`.
    #[error("Unsupported configuration format for {0}, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    /// A source could not be parsed or merged into [`Settings`](crate::config::Settings).
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value is syntactically fine but not accepted, like an unknown log level.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric setting falls outside its allowed range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// Dotted key of the setting, e.g. `trie.min_shared_prefix`
        key: String,
        /// Description of the valid range
        message: String,
    },

    /// Settings could not be serialized back to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}
