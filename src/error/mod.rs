//! Error module for the compact prefix tree crate.
//!
//! Each component has its own error enum; [`PrefixTreeError`] wraps them so
//! callers mixing tree operations, configuration and file access can
//! propagate everything with `?`.

use thiserror::Error;

use crate::data_structures::compact_trie::CompactTrieError;

pub mod config;

/// Result type alias used throughout the crate.
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum PrefixTreeError {
    /// Errors raised by tree operations.
    #[error("Trie error: {0}")]
    Trie(#[from] CompactTrieError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
