//! Compact prefix tree configuration module.
//!
//! This module defines the insertion settings of the compact prefix tree:
//! when sibling edges are merged, and an optional cap on word length.

use super::{ConfigResult, Validate};
use crate::data_structures::compact_trie::DEFAULT_MIN_SHARED_PREFIX;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Insertion settings for the compact prefix tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Minimum number of leading chars two sibling edges must share before
    /// they are merged under a common edge
    pub min_shared_prefix: usize,

    /// Maximum word length in chars (None for unbounded)
    pub max_word_len: Option<usize>,
}

impl TrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self {
            min_shared_prefix: DEFAULT_MIN_SHARED_PREFIX,
            max_word_len: None,
        }
    }

    /// Set the shared-prefix length that triggers a merge.
    ///
    /// Larger values produce fewer, wider branching nodes.
    pub fn with_min_shared_prefix(mut self, min_shared_prefix: usize) -> Self {
        if min_shared_prefix == 0 {
            panic!("Minimum shared prefix must be at least 1");
        }
        self.min_shared_prefix = min_shared_prefix;
        self
    }

    /// Reject words longer than `max_word_len` chars.
    ///
    /// Recursion depth of every tree operation is bounded by word length, so
    /// this also bounds stack usage for untrusted input.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        if max_word_len == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_len = Some(max_word_len);
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_shared_prefix == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.min_shared_prefix".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.max_word_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrieConfig::default();
        assert_eq!(config.min_shared_prefix, 2);
        assert_eq!(config.max_word_len, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = TrieConfig::new()
            .with_min_shared_prefix(4)
            .with_max_word_len(2048);

        assert_eq!(config.min_shared_prefix, 4);
        assert_eq!(config.max_word_len, Some(2048));
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let config = TrieConfig {
            min_shared_prefix: 0,
            ..TrieConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "trie.min_shared_prefix"
        ));

        let config = TrieConfig {
            max_word_len: Some(0),
            ..TrieConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "Minimum shared prefix must be at least 1")]
    fn test_invalid_min_shared_prefix() {
        let _config = TrieConfig::new().with_min_shared_prefix(0);
    }
}
