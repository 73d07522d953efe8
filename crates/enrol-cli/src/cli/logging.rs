//! File-based logging for the TUI.
//!
//! The TUI owns stdout, so log lines go to `${ENROL_HOME}/logs/` through a
//! non-blocking appender. The returned guard must stay alive for the
//! duration of the program or buffered lines are lost.

use std::fs;

use anyhow::{Context, Result};
use enrol_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter comes from the `ENROL_LOG` environment variable and defaults
/// to `info`.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir).context("Failed to create log directory")?;

    let appender = tracing_appender::rolling::daily(dir, "enrol.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ENROL_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
