//! File logging for the catalog browser.
//!
//! The terminal belongs to the UI while it runs, so log records go to
//! `<data dir>/logs/catalog.log` through a non-blocking writer. The filter is
//! read from `CATALOG_LOG` and defaults to `info`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CATALOG_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "catalog.log";

/// Install the global subscriber writing to the data directory.
///
/// Keep the returned guard alive until exit so buffered records are flushed.
pub fn initialize() -> Result<WorkerGuard> {
	initialize_in(&log_dir()?)
}

/// Directory receiving the log file.
pub fn log_dir() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join("logs"))
}

/// Full path of the log file written by [`initialize`].
pub fn log_file() -> Result<PathBuf> {
	Ok(log_dir()?.join(LOG_FILE))
}

/// Install the global subscriber writing to `dir`.
pub fn initialize_in(dir: &Path) -> Result<WorkerGuard> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, LOG_FILE);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_thread_names(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.context("failed to install the log subscriber")?;

	Ok(guard)
}
