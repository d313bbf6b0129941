//! File-backed logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a file under the
//! platform data directory. The filter comes from settings and can be
//! overridden with the standard `RUST_LOG` environment variable.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Initialize the global tracing subscriber writing to the log file.
pub fn initialize(filter: &str) -> Result<()> {
    let data_dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("could not create data directory {}", data_dir.display()))?;

    let log_path = data_dir.join("pdfsift.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("could not open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(path = %log_path.display(), "logging initialized");
    Ok(())
}
