// Copyright (c) 2026 Compact Prefix Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node implementation for the compact prefix tree.
//!
//! A [`TrieNode`] owns an insertion-ordered list of edges. Each edge carries a
//! label (a run of chars shared by every word below it) and a [`Child`], which
//! is either another node or the terminal sentinel.
//!
//! The serde representation is the plain nested mapping used for interop:
//! every node is a map from label to either `null` (terminal) or a nested map.
//!
//! ```
//! use compact_prefix_tree::data_structures::compact_trie::{Child, TrieNode};
//!
//! let node: TrieNode = serde_json::from_str(r#"{"abc": {"": null, "de": null}}"#).unwrap();
//! assert!(node.get("abc").is_some_and(|child| !child.is_terminal()));
//! assert_eq!(
//!     serde_json::to_string(&TrieNode::new().with_edge("x", Child::Terminal)).unwrap(),
//!     r#"{"x":null}"#
//! );
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label of the edge marking "the path to this node is itself a stored word".
pub const SUBSET_MARKER: &str = "";

/// Target of an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// The path ending with this edge is a stored word with no extensions.
    Terminal,

    /// The path continues into further branching.
    Node(TrieNode),
}

impl Child {
    /// Returns `true` for the terminal sentinel.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Child::Terminal)
    }

    /// Returns the nested node, if any.
    pub fn as_node(&self) -> Option<&TrieNode> {
        match self {
            Child::Terminal => None,
            Child::Node(node) => Some(node),
        }
    }

    /// Whether the path ending with the edge leading here spells a stored word.
    ///
    /// True for the terminal sentinel, for an empty node (a leaf written as
    /// `{}` instead of `null`) and for a node carrying the subset marker.
    pub fn ends_word(&self) -> bool {
        match self {
            Child::Terminal => true,
            Child::Node(node) => node.is_empty() || node.has_subset_marker(),
        }
    }

    /// Turns this child into a branching node that still records the word
    /// ending here, and returns it.
    pub(crate) fn make_branch(&mut self) -> &mut TrieNode {
        if let Child::Terminal = self {
            *self = Child::Node(TrieNode::new());
        }
        match self {
            Child::Node(node) => {
                if node.is_empty() {
                    node.mark_subset();
                }
                node
            }
            Child::Terminal => unreachable!("terminal child was replaced above"),
        }
    }
}

/// A node in the compact prefix tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Outgoing edges in insertion order.
    pub(super) edges: Vec<(String, Child)>,
}

impl TrieNode {
    /// Creates a new node without edges.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Builder form of [`TrieNode::insert_edge`].
    pub fn with_edge(mut self, label: impl Into<String>, child: Child) -> Self {
        self.insert_edge(label, child);
        self
    }

    /// Number of outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the node has no outgoing edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Looks up the child reached through exactly `label`.
    pub fn get(&self, label: &str) -> Option<&Child> {
        self.edges
            .iter()
            .find(|(edge, _)| edge == label)
            .map(|(_, child)| child)
    }

    /// Iterates over `(label, child)` pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &Child)> {
        self.edges.iter().map(|(label, child)| (label.as_str(), child))
    }

    /// Returns `true` if the node carries the empty-label subset marker.
    pub fn has_subset_marker(&self) -> bool {
        self.get(SUBSET_MARKER).is_some()
    }

    /// Sets the child under `label`, returning the child it replaced.
    ///
    /// This writes the edge verbatim and does not restore compression; use
    /// [`crate::data_structures::compact_trie::raw::add`] to insert words.
    pub fn insert_edge(&mut self, label: impl Into<String>, child: Child) -> Option<Child> {
        let label = label.into();
        match self.edges.iter_mut().find(|(edge, _)| *edge == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, child)),
            None => {
                self.edges.push((label, child));
                None
            }
        }
    }

    /// Adds the subset marker unless already present.
    pub(crate) fn mark_subset(&mut self) {
        if !self.has_subset_marker() {
            self.edges.push((SUBSET_MARKER.to_string(), Child::Terminal));
        }
    }
}

impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.edges.len()))?;
        for (label, child) in &self.edges {
            map.serialize_entry(label, child)?;
        }
        map.end()
    }
}

impl Serialize for Child {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Child::Terminal => serializer.serialize_none(),
            Child::Node(node) => node.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TrieNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TrieNodeVisitor)
    }
}

impl<'de> Deserialize<'de> for Child {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<TrieNode>::deserialize(deserializer)?.map_or(Child::Terminal, Child::Node))
    }
}

struct TrieNodeVisitor;

impl<'de> Visitor<'de> for TrieNodeVisitor {
    type Value = TrieNode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map from edge labels to nested maps or null")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TrieNode, A::Error> {
        let mut node = TrieNode::new();
        while let Some((label, child)) = access.next_entry::<String, Child>()? {
            node.insert_edge(label, child);
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_edge_replaces_existing_label() {
        let mut node = TrieNode::new();
        assert_eq!(node.insert_edge("abc", Child::Terminal), None);

        let nested = TrieNode::new().with_edge("de", Child::Terminal);
        let replaced = node.insert_edge("abc", Child::Node(nested.clone()));

        assert_eq!(replaced, Some(Child::Terminal));
        assert_eq!(node.len(), 1);
        assert_eq!(node.get("abc"), Some(&Child::Node(nested)));
    }

    #[test]
    fn test_make_branch_keeps_word_ending_here() {
        let mut child = Child::Terminal;
        child.make_branch().insert_edge("de", Child::Terminal);

        assert!(child.ends_word());
        let node = child.as_node().unwrap();
        assert!(node.has_subset_marker());
        assert_eq!(node.len(), 2);

        // An empty node is a leaf and gets the marker as well.
        let mut empty = Child::Node(TrieNode::new());
        assert!(empty.make_branch().has_subset_marker());
    }

    #[test]
    fn test_make_branch_leaves_populated_node_alone() {
        let mut child = Child::Node(TrieNode::new().with_edge("x", Child::Terminal));
        assert!(!child.make_branch().has_subset_marker());
        assert!(!child.ends_word());
    }

    #[test]
    fn test_serde_nested_mapping() {
        let value = json!({
            "http://www.example.com/": {"foo/": null, "john/": {"": null, "doe": null}},
            "x": {}
        });
        let node: TrieNode = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(node.len(), 2);
        assert!(node.get("x").is_some_and(Child::ends_word));
        let shared = node.get("http://www.example.com/").and_then(Child::as_node).unwrap();
        assert!(shared.get("foo/").is_some_and(Child::is_terminal));
        assert!(shared.get("john/").and_then(Child::as_node).is_some_and(TrieNode::has_subset_marker));

        assert_eq!(serde_json::to_value(&node).unwrap(), value);
    }

    #[test]
    fn test_deserialize_rejects_non_map_children() {
        assert!(serde_json::from_value::<TrieNode>(json!({"abc": 1})).is_err());
        assert!(serde_json::from_value::<TrieNode>(json!(["abc"])).is_err());
    }
}
