//! Tests for the error module.
//!
//! This module contains tests for error conversion and display.

use crate::data_structures::compact_trie::{CompactPrefixTree, CompactTrieError};
use crate::error::config::ConfigError;
use crate::error::{PrefixTreeError, PrefixTreeResult};

fn build_from_str(json: &str) -> PrefixTreeResult<CompactPrefixTree> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(CompactPrefixTree::from_json(&value)?)
}

/// Test that component errors convert with `?` and keep their message.
#[test]
fn test_errors_propagate_with_question_mark() {
    assert!(build_from_str(r#"["a", "b"]"#).is_ok());

    let err = build_from_str(r#"{"a": null}"#).unwrap_err();
    assert!(matches!(
        err,
        PrefixTreeError::Trie(CompactTrieError::InvalidArgument { .. })
    ));
    assert_eq!(err.to_string(), "Trie error: Expected string[], got object");

    let err = build_from_str("[1,").unwrap_err();
    assert!(matches!(err, PrefixTreeError::Serialization(_)));
}

/// Test that nested errors display their source.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = PrefixTreeError::from(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error = PrefixTreeError::from(ConfigError::ValidationError("bad level".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );
}
