//! Tracing subscriber initialization.
//!
//! The terminal belongs to the TUI, so logs go to a file. Follow them with
//! `tail -f` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "psearch=info,warn";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into (directory, file name).
///
/// A bare file name logs into the current directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaults to [`DEFAULT_FILTER`]. Writes go through a
/// background worker so rendering never waits on disk; keep the returned
/// guard alive for the whole run or buffered lines are lost on exit.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path has no file name, the directory cannot
/// be created, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<WorkerGuard, LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(guard)
}
