//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/flux-counter/`, `~/.cache/flux-counter/`
//! - macOS: `~/Library/Application Support/flux-counter/`, `~/Library/Caches/flux-counter/`
//! - Windows: `%APPDATA%\flux-counter\`, `%LOCALAPPDATA%\flux-counter\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "flux-counter";
const LOCAL_CONFIG_FILE: &str = ".flux-counter.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the application config directory
/// Returns ~/.config/flux-counter/ on Linux, ~/Library/Application Support/flux-counter/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory and ensure it exists
/// Returns ~/.cache/flux-counter/ on Linux, ~/Library/Caches/flux-counter/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(global_config_path_in(&config_dir()?))
}

fn global_config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(GLOBAL_CONFIG_FILE)
}
