//! Data structures provided by the crate.
//!
//! All implementations adhere to the same constraints:
//! - No unsafe code
//! - Owned, single-writer structures; callers add locking if they share them
//! - Errors are returned, never panicked on, for any caller-supplied input

pub mod compact_trie;

// Re-export common data structures
pub use compact_trie::{CompactPrefixTree, CompactTrieError, CompactTrieResult, PrefixMatch, TrieNode};
