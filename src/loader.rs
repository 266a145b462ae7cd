//! Reading and writing trees as JSON data files.
//!
//! A file holds either a word list (`["a", "b"]`) or a tree in the nested
//! mapping form (`{"abc": {"": null, "de": null}}`).

use std::path::Path;

use serde_json::Value;

use crate::config::TrieConfig;
use crate::data_structures::compact_trie::{CompactPrefixTree, CompactTrieError, TrieNode};
use crate::error::PrefixTreeResult;

/// Loads a tree from a JSON file holding a word list or a nested mapping.
///
/// # Errors
///
/// * `PrefixTreeError::Io` - if the file cannot be read.
/// * `PrefixTreeError::Serialization` - if the file is not valid JSON, or a
///   mapping contains values other than maps and `null`.
/// * `PrefixTreeError::Trie` - if the top-level value is neither an array nor
///   an object, or a word list contains non-strings.
pub fn load_tree<P: AsRef<Path>>(path: P, config: TrieConfig) -> PrefixTreeResult<CompactPrefixTree> {
    let path = path.as_ref();
    let value: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;

    let tree = match value {
        Value::Array(_) => CompactPrefixTree::from_json_with_config(&value, config)?,
        Value::Object(_) => {
            let root: TrieNode = serde_json::from_value(value)?;
            CompactPrefixTree::from_trie_with_config(root, config)
        }
        other => {
            return Err(CompactTrieError::invalid_json("string[] or trie mapping", &other).into())
        }
    };

    tracing::debug!(path = %path.display(), words = tree.len(), "loaded tree");
    Ok(tree)
}

/// Writes the tree to `path` in the nested mapping form.
pub fn save_tree<P: AsRef<Path>>(tree: &CompactPrefixTree, path: P) -> PrefixTreeResult<()> {
    let path = path.as_ref();
    std::fs::write(path, serde_json::to_string_pretty(tree.root())?)?;
    tracing::debug!(path = %path.display(), words = tree.len(), "saved tree");
    Ok(())
}
