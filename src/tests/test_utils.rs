//! Test utilities and fixtures for the compact prefix tree crate.
//!
//! This module provides reusable proptest strategies and a temporary
//! directory fixture for tests that touch files or environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum word length for generated test words.
const MAX_WORD_LENGTH: usize = 8;

/// Maximum number of words per generated word list.
const MAX_WORDS: usize = 40;

/// Fresh temporary directory, removed when dropped.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for words over a tiny alphabet.
///
/// The alphabet is small so that generated words collide on prefixes often,
/// and includes a multibyte char to exercise char-boundary splitting. The
/// empty word is included on purpose.
pub fn word_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex(&format!("[ab/é]{{0,{MAX_WORD_LENGTH}}}"))
        .expect("valid regex")
        .boxed()
}

/// Generate a strategy for word lists, duplicates allowed.
pub fn words_strategy() -> BoxedStrategy<Vec<String>> {
    prop::collection::vec(word_strategy(), 0..MAX_WORDS).boxed()
}

/// Generate a strategy for `https` URLs on `host` with a non-empty path.
pub fn url_strategy(host: &str) -> BoxedStrategy<String> {
    let base = format!("https://{host}/");
    prop::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,2}/?")
        .expect("valid regex")
        .prop_map(move |path| format!("{base}{path}"))
        .boxed()
}

/// Test fixture for tests requiring files and environment variables.
///
/// Environment variables set through the fixture are removed when it is
/// dropped.
pub struct TestFixture {
    /// Directory holding files written by the test
    pub temp_dir: TempDir,
    /// Variables to unset on drop
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Creates a fixture with an empty temporary directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Sets `key` for the lifetime of the fixture.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        let key = key.into();
        std::env::set_var(&key, value.as_ref());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
