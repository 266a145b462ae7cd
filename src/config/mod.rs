//! Configuration module for the compact prefix tree.
//!
//! Settings can be loaded from files (TOML, JSON) and overridden with
//! environment variables. All values are validated before use.

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod trie;

pub use trie::TrieConfig;

/// Result alias for settings loading and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment prefix used by [`crate::init`]; `CPT__TRIE__MIN_SHARED_PREFIX=3`
/// overrides `trie.min_shared_prefix`.
pub const ENV_PREFIX: &str = "CPT";

/// Settings sections that check their own values after deserialization.
pub trait Validate {
    /// Returns the first invalid value found in `self`, if any.
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Tree insertion settings
    pub trie: TrieConfig,

    /// Subscriber settings used by [`crate::logging::init_logging`]
    pub log: LogConfig,
}

impl Settings {
    /// Serializes the settings as pretty-printed TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Writes the default settings to `path` as TOML, creating parent
    /// directories as needed.
    pub fn write_default<P: AsRef<Path>>(path: P) -> crate::error::PrefixTreeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Settings::default().to_toml()?)?;
        tracing::info!("Default configuration written to {:?}", path);
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Settings for the `tracing` subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Fallback filter level when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines instead of pretty output
    pub json: bool,

    /// Attach file and line to each event
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader reading `config_path` (if any) and environment
    /// variables starting with `env_prefix` followed by `__`.
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment
    /// variables (`PREFIX__SECTION__KEY`), in that order of precedence.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<Settings> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Settings::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        settings.validate()?;
        tracing::debug!(?settings, "configuration loaded");

        Ok(settings)
    }
}
