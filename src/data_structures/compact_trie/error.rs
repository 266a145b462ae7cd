// Copyright (c) 2026 Compact Prefix Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error types for the compact prefix tree.

/// Errors that can occur in compact prefix tree operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CompactTrieError {
    /// Input had the wrong shape, e.g. a JSON object where a word list was expected.
    #[error("Expected {expected}, got {actual}")]
    InvalidArgument {
        /// Description of the accepted input.
        expected: &'static str,
        /// Kind of value that was supplied.
        actual: String,
    },

    /// Word is longer than the configured `max_word_len`.
    #[error("Word of {length} chars exceeds maximum length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word in chars.
        length: usize,
        /// The configured maximum.
        max_length: usize,
    },
}

impl CompactTrieError {
    /// Builds an [`CompactTrieError::InvalidArgument`] naming the JSON kind of `actual`.
    pub(crate) fn invalid_json(expected: &'static str, actual: &serde_json::Value) -> Self {
        Self::InvalidArgument {
            expected,
            actual: json_kind(actual).to_string(),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type for compact prefix tree operations.
pub type CompactTrieResult<T> = std::result::Result<T, CompactTrieError>;
