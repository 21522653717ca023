//! File logging for debugging
//!
//! The terminal is owned by the UI, so log records never go to stdout. When
//! logging is enabled in the configuration a `fern` dispatcher writes every
//! record from this crate to a file under the local data directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Get the path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for logs"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build a dispatcher writing to `path`, creating parent directories as needed
pub fn build_dispatch(path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("bucketlist", LevelFilter::Debug)
        .chain(file))
}

/// Install the global logger if logging is enabled.
///
/// Returns the log file path when a logger was installed.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(&path)?.apply().context("Failed to install logger")?;
    log::info!("Logging to {}", path.display());

    Ok(Some(path))
}
