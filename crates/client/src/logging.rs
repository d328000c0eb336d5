//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` and defaults to `warn` so battle output
//! stays readable. Logs go to stderr unless a log directory is configured.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogDestination;

pub const LOG_FILE: &str = "namebrawl.log";

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file output is
/// flushed.
pub fn setup_logging(destination: &LogDestination) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let dir = match destination {
        LogDestination::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            return Ok(None);
        }
        LogDestination::Directory(dir) => dir.clone(),
        LogDestination::PlatformDefault => default_log_dir(),
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Log file: {}", dir.join(LOG_FILE).display());
    Ok(Some(guard))
}

/// Platform cache directory, e.g. `~/.cache/namebrawl/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "namebrawl")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("namebrawl").join("logs"))
}
