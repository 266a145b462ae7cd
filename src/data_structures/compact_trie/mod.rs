// Copyright (c) 2026 Compact Prefix Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Compact (edge-compressed) prefix tree over strings.
//!
//! Words sharing a leading run of chars share one edge, so a set of URLs or
//! paths with long common prefixes is stored once per distinct segment. The
//! tree answers longest-prefix queries and can rebuild the full word set from
//! its edges.
//!
//! # Features
//!
//! - Edge splitting and merging on insert; re-inserting a word never changes
//!   the tree.
//! - Longest-prefix lookup that reports whether the prefix is a stored word.
//! - Raw functions in [`raw`] that operate on a bare [`TrieNode`], e.g. one
//!   deserialized from JSON.
//!
//! # Example
//!
//! ```
//! use compact_prefix_tree::data_structures::compact_trie::CompactPrefixTree;
//!
//! let mut tree = CompactPrefixTree::from_words([
//!     "http://www.example.com/foo/",
//!     "http://www.example.com/john/",
//!     "http://www.example.com/baz/",
//! ])
//! .unwrap();
//!
//! let found = tree.prefix("http://www.example.com/john/doe");
//! assert_eq!(found.prefix, "http://www.example.com/john/");
//! assert!(found.is_proper);
//!
//! let found = tree.prefix("http://www.example.com/bazinga");
//! assert_eq!(found.prefix, "http://www.example.com/");
//! assert!(!found.is_proper);
//!
//! tree.add("http://www.example.com/").unwrap().add("ftp://mirror/").unwrap();
//! assert_eq!(tree.items().len(), 5);
//! ```
//!
//! # Interop with plain mappings
//!
//! A tree can also be kept as the plain nested mapping `label -> map | null`
//! and manipulated without the wrapper:
//!
//! ```
//! use compact_prefix_tree::data_structures::compact_trie::{raw, TrieNode};
//!
//! let mut root: TrieNode = serde_json::from_str(r#"{"abc": null}"#).unwrap();
//! raw::add("abcde", &mut root);
//!
//! assert_eq!(
//!     serde_json::to_value(&root).unwrap(),
//!     serde_json::json!({"abc": {"": null, "de": null}})
//! );
//! assert_eq!(raw::get_prefix("abcdef", &root).prefix, "abcde");
//! assert_eq!(raw::get_words_from_trie(&root).len(), 2);
//! ```

mod error;
mod node;
pub mod raw;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::config::TrieConfig;

pub use error::{CompactTrieError, CompactTrieResult};
pub use node::{Child, TrieNode, SUBSET_MARKER};
pub use raw::{PrefixMatch, DEFAULT_MIN_SHARED_PREFIX};

/// A compact prefix tree together with the set of words inserted into it.
///
/// The word set is the authority on membership: [`CompactPrefixTree::prefix`]
/// reports `is_proper` only for strings that were inserted as words, even if
/// the same string is reachable as a shared path in the tree.
#[derive(Debug, Clone, Default)]
pub struct CompactPrefixTree {
    /// Every word successfully inserted
    words: HashSet<String>,

    /// Root of the tree; has no incoming label
    root: TrieNode,

    /// Insertion settings
    config: TrieConfig,
}

impl CompactPrefixTree {
    /// Creates an empty tree with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty tree with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            words: HashSet::new(),
            root: TrieNode::new(),
            config,
        }
    }

    /// Builds a tree from an initial list of words.
    ///
    /// Empty strings and duplicates are skipped.
    ///
    /// # Errors
    ///
    /// * `CompactTrieError::WordTooLong` - only when a `max_word_len` is configured.
    pub fn from_words<I, S>(words: I) -> CompactTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_with_config(words, TrieConfig::default())
    }

    /// Builds a tree from an initial list of words using `config`.
    pub fn from_words_with_config<I, S>(words: I, config: TrieConfig) -> CompactTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::with_config(config);
        for word in words {
            tree.add(word.as_ref())?;
        }
        debug!(words = tree.len(), "built compact prefix tree");
        Ok(tree)
    }

    /// Builds a tree from a JSON array of strings.
    ///
    /// # Errors
    ///
    /// * `CompactTrieError::InvalidArgument` - if `value` is not an array, or
    ///   any element is not a string.
    /// * `CompactTrieError::WordTooLong` - only when a `max_word_len` is configured.
    pub fn from_json(value: &Value) -> CompactTrieResult<Self> {
        Self::from_json_with_config(value, TrieConfig::default())
    }

    /// Builds a tree from a JSON array of strings using `config`.
    pub fn from_json_with_config(value: &Value, config: TrieConfig) -> CompactTrieResult<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| CompactTrieError::invalid_json("string[]", value))?;

        let words = items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| CompactTrieError::invalid_json("string", item))
            })
            .collect::<CompactTrieResult<Vec<&str>>>()?;

        Self::from_words_with_config(words, config)
    }

    /// Wraps an existing tree, e.g. one deserialized from a data file.
    ///
    /// The word set is rebuilt from the tree's edges.
    pub fn from_trie(root: TrieNode) -> Self {
        Self::from_trie_with_config(root, TrieConfig::default())
    }

    /// Wraps an existing tree using `config` for later insertions.
    ///
    /// `max_word_len` only guards words added afterwards; words already
    /// stored in `root` are adopted whatever their length.
    pub fn from_trie_with_config(root: TrieNode, config: TrieConfig) -> Self {
        let words = raw::get_words_from_trie(&root);
        debug!(words = words.len(), "wrapped existing tree");
        Self {
            words,
            root,
            config,
        }
    }

    /// Adds a word, returning `self` for chaining.
    ///
    /// The empty string and words already present are no-ops.
    ///
    /// # Errors
    ///
    /// * `CompactTrieError::WordTooLong` - if the word exceeds the configured
    ///   `max_word_len`. Nothing is modified in that case.
    pub fn add(&mut self, word: &str) -> CompactTrieResult<&mut Self> {
        if word.is_empty() || self.words.contains(word) {
            return Ok(self);
        }

        if let Some(max_length) = self.config.max_word_len {
            let length = word.chars().count();
            if length > max_length {
                return Err(CompactTrieError::WordTooLong { length, max_length });
            }
        }

        debug!(word, "adding word");
        raw::insert(word, &mut self.root, self.config.min_shared_prefix.max(1));
        self.words.insert(word.to_string());
        Ok(self)
    }

    /// Adds a word given as a JSON value.
    ///
    /// # Errors
    ///
    /// * `CompactTrieError::InvalidArgument` - if `value` is not a string.
    pub fn add_json(&mut self, value: &Value) -> CompactTrieResult<&mut Self> {
        let word = value
            .as_str()
            .ok_or_else(|| CompactTrieError::invalid_json("string", value))?;
        self.add(word)
    }

    /// Returns the longest prefix of `word` stored along the tree's edges and
    /// whether that prefix was itself inserted as a word.
    pub fn prefix(&self, word: &str) -> PrefixMatch {
        let found = raw::get_prefix(word, &self.root);
        PrefixMatch {
            is_proper: self.words.contains(&found.prefix),
            prefix: found.prefix,
        }
    }

    /// All stored words.
    pub fn items(&self) -> &HashSet<String> {
        &self.words
    }

    /// Returns `true` if `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Consumes the wrapper, returning the root node.
    pub fn into_root(self) -> TrieNode {
        self.root
    }

    /// The configuration used for insertions.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the tree as a plain nested JSON mapping.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.root)
    }
}
