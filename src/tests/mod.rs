//! Test modules for the compact prefix tree crate.
//!
//! Data structure tests live next to their implementation; this module holds
//! the cross-cutting suites:
//! - Configuration loading and validation
//! - Error conversion and display
//! - Shared fixtures and proptest strategies

pub mod error_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, url_strategy, word_strategy, words_strategy, TestFixture};
