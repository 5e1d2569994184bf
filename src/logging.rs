//! File-based tracing setup.
//!
//! The terminal UI owns stdout/stderr, so diagnostics are written to a log
//! file instead. Initialization never panics: if the file cannot be opened the
//! application runs without logging.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::constants::{LOG_ENV_VAR, LOG_FILE_NAME};

/// Builds the filter: `LAZYBOOKS_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn build_filter(configured_level: &str, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { configured_level };
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a global subscriber appending to `<log_dir>/lazybooks.log`.
///
/// Returns the log file path. Fails if the directory or file cannot be
/// created or a global subscriber is already installed.
pub fn init_logging(log_dir: &Path, filter: EnvFilter) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "logging initialized"
    );
    Ok(log_path)
}
