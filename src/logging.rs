//! Logging setup.
//!
//! The library only emits `tracing` events; applications embedding it can
//! call [`init_logging`] to install a subscriber configured from [`LogConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{PrefixTreeError, PrefixTreeResult};

/// Installs a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Fails instead of
/// panicking if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> PrefixTreeResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PrefixTreeError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(config.source_location)
        .with_file(config.source_location);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    installed
        .map_err(|e| PrefixTreeError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
