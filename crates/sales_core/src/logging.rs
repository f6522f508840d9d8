use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset. Console stays quiet on success so
/// stdout/stderr carry only the program's own output.
pub const DEFAULT_FILTER: &str = "warn";

/// File name prefix for the daily-rotated log file.
const LOG_FILE_PREFIX: &str = "sample-sales-data";

/// Initializes logging: compact console output on stderr, plus a daily
/// rotated file when `log_dir` is given.
///
/// Returns the file writer's guard, which must be kept alive until exit so
/// buffered lines are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one global subscriber can be installed per process, so these
    // tests accept either outcome of `try_init` and check the side effects.

    #[test]
    fn test_init_logging_creates_nested_log_dir() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let logs_dir = tmp.path().join("nested").join("logs");
        assert!(!logs_dir.exists());

        let result = init_logging(Some(&logs_dir));
        assert!(logs_dir.exists());
        drop(result);
    }

    #[test]
    fn test_init_logging_with_dir_reports_subscriber_conflicts() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let logs_dir = tmp.path().join("app_logs");

        match init_logging(Some(&logs_dir)) {
            Ok(guard) => assert!(guard.is_some()),
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("logging"), "unexpected error: {msg}");
            }
        }
        assert!(logs_dir.exists());
    }

    #[test]
    fn test_init_logging_fails_when_log_dir_is_a_file() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, b"x").unwrap();

        assert!(init_logging(Some(&blocker.join("logs"))).is_err());
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
