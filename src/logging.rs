//! Tracing setup for the command line tool

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// Logs go to stderr unless `log_file` is given, in which case they are
/// appended to that file as JSON lines. Verbosity comes from `RUST_LOG`.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;
            Ok(guard)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;
            Ok(guard)
        }
    }
}
