//! Configuration and file management for flux-counter
//!
//! This crate provides:
//! - Config and cache directory paths
//! - Configuration file discovery and loading (TOML)
//! - Application configuration (CounterConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{CounterConfig, LogTarget};
pub use config_file::{load_config_file, read_config_file};
pub use paths::cache_dir;
