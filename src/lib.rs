//! Compact Prefix Tree Library
//!
//! An edge-compressed prefix tree over strings. Words sharing leading runs of
//! chars share edges, which keeps sets of URLs or paths with long common
//! prefixes small, and makes "which stored prefix does this string start
//! with?" a walk over a handful of edges.
//!
//! # Architecture
//!
//! - [`data_structures::compact_trie`] holds the tree: the raw algorithms over
//!   a bare [`TrieNode`] and the [`CompactPrefixTree`] wrapper that tracks the
//!   inserted words.
//! - [`config`] loads and validates [`config::Settings`] from files and
//!   environment variables.
//! - [`loader`] reads and writes trees as JSON data files.
//! - [`logging`] installs a `tracing` subscriber for applications that want one.
//!
//! # Example
//!
//! ```
//! use compact_prefix_tree::CompactPrefixTree;
//!
//! let tree = CompactPrefixTree::from_words(["abc", "abcde"]).unwrap();
//! let found = tree.prefix("abcdx");
//! assert_eq!(found.prefix, "abc");
//! assert!(found.is_proper);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{CompactPrefixTree, CompactTrieError, PrefixMatch, TrieNode};
pub use error::{PrefixTreeError, PrefixTreeResult};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads settings from `config_path` (if any) and `CPT__*` environment
/// variables, then installs the logging subscriber they describe.
pub fn init<P: AsRef<std::path::Path>>(config_path: Option<P>) -> PrefixTreeResult<config::Settings> {
    let settings = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&settings.log)?;
    Ok(settings)
}
