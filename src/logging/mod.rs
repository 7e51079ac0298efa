//! Application logging functionality
//!
//! Sets up the `tracing` subscriber: human-readable output on stderr, and an
//! optional plain log file under ~/.config/prodnames/logs/.

use crate::core::config_file::ConfigFile;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "prodnames=debug,norad=warn"
    } else {
        "prodnames=info,norad=warn"
    }
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("prodnames-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file when dropped, so keep it alive
/// for the whole run.
pub fn init_logging(verbose: bool, log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if log_to_file {
        let dir = logs_dir();
        fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, current_log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if log_to_file {
        tracing::debug!("Logging to {:?}", current_log_file());
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_dated() {
        let name = current_log_file_name();
        assert!(name.starts_with("prodnames-"));
        assert!(name.ends_with(".log"));
        // prodnames-YYYY-MM-DD.log
        assert_eq!(name.len(), "prodnames-".len() + 10 + ".log".len());
    }

    #[test]
    fn verbose_filter_enables_debug() {
        assert!(default_filter(true).contains("prodnames=debug"));
        assert!(default_filter(false).contains("prodnames=info"));
    }
}
