//! Logging configuration using tracing

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "VAULTFEED_LOG";
const LOG_FILE: &str = "vaultfeed.log";

/// Initialize the logging subsystem
///
/// Logs go to a daily file under `<data-local>/vaultfeed/logs/`, never to the
/// terminal the TUI is drawing on. Level comes from `VAULTFEED_LOG`.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
///
/// # Examples
/// ```bash
/// VAULTFEED_LOG=debug vaultfeed
/// VAULTFEED_LOG=vaultfeed::thumbs=trace vaultfeed
/// ```
pub fn init() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("vaultfeed=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vaultfeed starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(guard)
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("vaultfeed").join("logs")
}

/// Log file base path; the daily appender adds a `.YYYY-MM-DD` suffix
pub fn current_log_file() -> PathBuf {
    log_directory().join(LOG_FILE)
}
