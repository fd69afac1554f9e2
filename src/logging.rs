use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::Config;

/// Install the file logger when a log path is configured.
///
/// The TUI owns the terminal, so events never go to stdout or stderr.
pub(crate) fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
pub(crate) fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

pub(crate) fn default_log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cashbook", "Cashbook")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join("cashbook.log"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("cashbook.log");
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cashbook.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_init_without_path_is_noop() {
        assert!(init(&Config::default()).is_ok());
    }

    #[test]
    fn test_default_log_path_file_name() {
        if let Ok(path) = default_log_path() {
            assert_eq!(path.file_name().unwrap(), "cashbook.log");
        }
    }
}
