//! Error types for psearch.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Startup failures returned from `main` (fatal)
//!   - [`ConfigError`](crate::config::ConfigError) - unreadable or invalid config file
//!   - [`DatasetError`] - unreadable or invalid fallback dataset file
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup
//!   - `std::io::Error` - runtime startup, terminal setup and rendering
//! - [`TransportError`] - remote search failures (non-fatal)
//!
//! # Recovery Strategy
//!
//! Transport errors never reach the user. The search backend returns them as
//! an ordinary `Err`, the controller logs them and resolves the search from
//! the local dataset instead. Only startup errors end the session.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Every variant is fatal: it aborts startup (or the TUI loop) and is printed
/// by `main` before exiting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Fallback dataset file could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Async runtime could not be started.
    #[error("Runtime error: {0}")]
    Runtime(#[source] std::io::Error),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a remote search attempt.
///
/// Any of these routes the search to the local fallback dataset. None of
/// them is shown to the user.
///
/// # Examples
///
/// ```
/// use psearch::model::TransportError;
///
/// let err = TransportError::Status { status: 503 };
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded {status}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// A non-empty body line was not a JSON object.
    #[error("Malformed NDJSON at line {line_number}: {message}")]
    MalformedLine {
        /// 1-based line number within the response body.
        line_number: usize,
        /// serde_json error message.
        message: String,
    },
}

/// Failure loading a fallback dataset from disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("Failed to read dataset at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The file is not a JSON array of person records.
    #[error("Invalid dataset JSON in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}
