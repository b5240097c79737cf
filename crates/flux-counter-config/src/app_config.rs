//! Application configuration
//!
//! Configuration loaded from `.flux-counter.toml` or the global config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where log output goes
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Standard error
    #[default]
    Stderr,
    /// Timestamped file in the cache directory
    File,
}

/// Application configuration loaded from `.flux-counter.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CounterConfig {
    /// Value of the `counter` slice before the first step
    #[serde(default)]
    pub initial_counter: i64,

    /// Value of the `sum` slice before the first step
    #[serde(default)]
    pub initial_sum: i64,

    /// Log destination
    #[serde(default)]
    pub log_target: LogTarget,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print the final state
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_counter: 0,
            initial_sum: 0,
            log_target: LogTarget::default(),
            log_level: default_log_level(),
            pretty: default_pretty(),
        }
    }
}

impl CounterConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    ///
    /// A discovered file that fails to parse is an error rather than a
    /// silent fallback, since logging may not be set up yet to report it.
    pub fn load() -> Result<Self> {
        Self::from_discovered(crate::load_config_file())
    }

    /// Parse the result of config discovery
    pub fn from_discovered(found: Option<(PathBuf, String)>) -> Result<Self> {
        match found {
            Some((path, content)) => {
                let config = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                log::info!("Loaded app config from {}", path.display());
                Ok(config)
            }
            None => {
                log::debug!("Using default app config");
                Ok(Self::default())
            }
        }
    }

    /// Load config from an explicit path; unlike `load`, errors are returned
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
