//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "vendor-server";

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir exists
    if let Some(dir) = log_dir
        && dir.exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let subscriber = subscriber.with_ansi(false).with_writer(file_appender);
        // try_init: tests may install a subscriber more than once
        let _ = if json {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        };
        return;
    }

    let _ = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}

/// Delete rolled log files older than `days`
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path, days: u64) -> std::io::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let max_age = Duration::from_secs(days * 24 * 60 * 60);
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_log || !path.is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let expired = now
            .duration_since(modified)
            .map(|age| age > max_age)
            .unwrap_or(false);
        if expired {
            std::fs::remove_file(&path)?;
            removed += 1;
        }
    }

    if removed > 0 {
        tracing::info!(removed, dir = %log_dir.display(), "Old log files removed");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_keeps_fresh_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vendor-server.2026-01-01"), "x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(cleanup_old_logs(dir.path(), 7).unwrap(), 0);
        assert!(dir.path().join("vendor-server.2026-01-01").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(&dir.path().join("nope"), 7).unwrap(), 0);
    }
}
