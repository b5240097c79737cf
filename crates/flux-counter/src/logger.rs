//! Logging using simplelog
//!
//! Log output goes to stderr by default. With `log_target = "file"` it goes to
//! a timestamped file in the cache directory (~/.cache/flux-counter/ on Linux).

use anyhow::{Context, Result};
use flux_counter_config::{CounterConfig, LogTarget};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path in the cache directory
fn log_file_path() -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("flux-counter-{}.log", timestamp);

    Ok(flux_counter_config::cache_dir()?.join(filename))
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured level.
/// Returns the log file path when logging to a file.
pub fn init(config: &CounterConfig) -> Result<Option<PathBuf>> {
    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or_else(|_| parse_level(&config.log_level));

    // Configure simplelog with timestamps
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    match config.log_target {
        LogTarget::Stderr => {
            TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)
                .context("Failed to initialize logger")?;
            Ok(None)
        }
        LogTarget::File => {
            let log_file = log_file_path()?;
            let file = File::create(&log_file)
                .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
            WriteLogger::init(level, log_config, file).context("Failed to initialize logger")?;
            Ok(Some(log_file))
        }
    }
}
