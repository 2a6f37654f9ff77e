//! Logging setup
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Install a global `fmt` subscriber writing to `log_file`
///
/// Returns `None` when no file is given. Keep the returned guard alive for the
/// life of the program or buffered lines are lost.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a subscriber is already set.
pub fn init(log_file: Option<&Path>, level: LevelFilter) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}
