use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::paths;

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `$CWD/.flux-counter.toml`
/// 2. `~/.config/flux-counter/config.toml`
///
/// Returns the path and file content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates = [paths::local_config_path(), paths::global_config_path()];

    candidates
        .into_iter()
        .filter_map(|path| path.ok())
        .find_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            log::debug!("Loaded config from {}", path.display());
            Some((path, content))
        })
}

/// Read a config file that the user pointed at explicitly
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_counter = 3").unwrap();

        let content = read_config_file(file.path()).unwrap();
        assert_eq!(content.trim(), "initial_counter = 3");
    }

    #[test]
    fn test_read_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
