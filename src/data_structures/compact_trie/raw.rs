// Copyright (c) 2026 Compact Prefix Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Tree algorithms over a bare [`TrieNode`].
//!
//! These functions need no word set, so they work on any tree, including one
//! deserialized from a data file. [`super::CompactPrefixTree`] wraps them and
//! keeps the authoritative set of inserted words alongside the root.
//!
//! All positions are char based: labels are only ever split on char
//! boundaries.

use std::collections::HashSet;

use serde::Serialize;

use super::node::{Child, TrieNode};

/// Shared-prefix length (in chars) below which siblings are not merged.
pub const DEFAULT_MIN_SHARED_PREFIX: usize = 2;

/// Result of a longest-prefix lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixMatch {
    /// Longest prefix of the query reachable through whole edges.
    pub prefix: String,

    /// Whether `prefix` is a stored word rather than only a shared path.
    pub is_proper: bool,
}

/// Adds `word` to the tree rooted at `node`. Empty words are ignored.
pub fn add(word: &str, node: &mut TrieNode) {
    insert(word, node, DEFAULT_MIN_SHARED_PREFIX);
}

/// Returns the longest prefix of `word` reachable by walking whole edges.
///
/// `is_proper` is structural here: the walk ended on an edge that closes a
/// stored word.
pub fn get_prefix(word: &str, node: &TrieNode) -> PrefixMatch {
    let (prefix, last) = walk(word, node);
    PrefixMatch {
        is_proper: last.is_some_and(Child::ends_word),
        prefix,
    }
}

/// Reconstructs every word stored below `node`.
pub fn get_words_from_trie(node: &TrieNode) -> HashSet<String> {
    let mut words = HashSet::new();
    collect_words(node, &mut String::new(), &mut words);
    words
}

/// Inserts `word` below `node`, merging siblings that share at least
/// `min_shared` leading chars.
pub(crate) fn insert(word: &str, node: &mut TrieNode, min_shared: usize) {
    if word.is_empty() {
        return;
    }

    // An edge that is a whole prefix of the word: descend through it.
    if let Some(index) = longest_edge_prefix(node, word) {
        let (label, child) = &mut node.edges[index];
        let rest = &word[label.len()..];
        if rest.is_empty() {
            // Word ends exactly at this edge.
            if let Child::Node(inner) = child {
                if !inner.is_empty() && !inner.has_subset_marker() {
                    tracing::trace!(label = %label, "marking path as stored word");
                    inner.mark_subset();
                }
            }
        } else {
            insert(rest, child.make_branch(), min_shared);
        }
        return;
    }

    match shared_with_sibling(node, word, min_shared) {
        Some(shared) => {
            let common = word[..shared].to_string();
            branch_off(node, common, &word[shared..], min_shared);
        }
        None => node.edges.push((word.to_string(), Child::Terminal)),
    }
}

/// Index of the longest non-empty label that `word` starts with.
fn longest_edge_prefix(node: &TrieNode, word: &str) -> Option<usize> {
    node.edges
        .iter()
        .enumerate()
        .filter(|(_, (label, _))| !label.is_empty() && word.starts_with(label.as_str()))
        .max_by_key(|(_, (label, _))| label.len())
        .map(|(index, _)| index)
}

/// Byte length of the prefix `word` should share with a new branch node, if
/// any sibling qualifies.
///
/// A sibling qualifies when it shares at least `min_shared` chars with a
/// longer word, or when the whole word is a prefix of it. The latter keeps
/// every stored word reachable by the char-by-char probe in [`walk`].
fn shared_with_sibling(node: &TrieNode, word: &str, min_shared: usize) -> Option<usize> {
    node.edges.iter().find_map(|(label, _)| {
        let (bytes, chars) = common_prefix(label, word);
        let qualifies = if bytes == word.len() {
            chars > 0
        } else {
            chars >= min_shared
        };
        qualifies.then_some(bytes)
    })
}

/// Moves every sibling starting with `common` under a new edge `common`,
/// then inserts `tail` below it. The new edge takes the slot of the first
/// moved sibling.
fn branch_off(node: &mut TrieNode, common: String, tail: &str, min_shared: usize) {
    let mut branch = TrieNode::new();
    let mut slot = None;
    let mut kept = Vec::with_capacity(node.edges.len());

    for (label, child) in std::mem::take(&mut node.edges) {
        if !label.is_empty() && label.starts_with(common.as_str()) {
            slot.get_or_insert(kept.len());
            tracing::trace!(label = %label, common = %common, "splitting edge");
            branch.edges.push((label[common.len()..].to_string(), child));
        } else {
            kept.push((label, child));
        }
    }

    if tail.is_empty() {
        branch.mark_subset();
    } else {
        insert(tail, &mut branch, min_shared);
    }

    let slot = slot.unwrap_or(kept.len());
    kept.insert(slot, (common, Child::Node(branch)));
    node.edges = kept;
}

/// Common leading run of `a` and `b` as `(byte length, char count)`.
fn common_prefix(a: &str, b: &str) -> (usize, usize) {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .fold((0, 0), |(_, count), ((index, c), _)| {
            (index + c.len_utf8(), count + 1)
        })
}

/// Walks `word` through the tree, returning the matched prefix and the child
/// reached through the last matched edge.
fn walk<'a>(word: &str, root: &'a TrieNode) -> (String, Option<&'a Child>) {
    let mut prefix = String::new();
    let mut last = None;
    let mut node = root;
    let mut rest = word;

    while !rest.is_empty() {
        // Grow the probe one char at a time until it names an edge.
        let matched = rest
            .char_indices()
            .map(|(index, c)| index + c.len_utf8())
            .find_map(|end| node.get(&rest[..end]).map(|child| (end, child)));

        let Some((end, child)) = matched else {
            break;
        };
        prefix.push_str(&rest[..end]);
        rest = &rest[end..];
        last = Some(child);

        match child {
            Child::Node(next) => node = next,
            Child::Terminal => break,
        }
    }

    tracing::trace!(query = word, prefix = %prefix, "longest prefix walk");
    (prefix, last)
}

fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut HashSet<String>) {
    for (label, child) in &node.edges {
        let restore = prefix.len();
        prefix.push_str(label);
        match child {
            Child::Node(inner) if !inner.is_empty() => collect_words(inner, prefix, words),
            _ if prefix.is_empty() => {}
            _ => {
                words.insert(prefix.clone());
            }
        }
        prefix.truncate(restore);
    }
}
