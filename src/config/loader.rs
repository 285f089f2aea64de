//! Configuration file loading with precedence handling.

use crate::source::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "PSEARCH_CONFIG";
/// Environment variable overriding the search endpoint.
pub const ENV_ENDPOINT: &str = "PSEARCH_ENDPOINT";
/// Environment variable overriding the session cookie.
pub const ENV_COOKIE: &str = "PSEARCH_COOKIE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/psearch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Search endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Cookie header value sent with every search request.
    #[serde(default)]
    pub cookie: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// JSON file replacing the built-in fallback dataset.
    #[serde(default)]
    pub fallback_dataset: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Search endpoint URL.
    pub endpoint: String,
    /// Extra cookie header, if any.
    pub cookie: Option<String>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Fallback dataset file; `None` means the built-in dataset.
    pub fallback_dataset: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cookie: None,
            log_file_path: default_log_path(),
            fallback_dataset: None,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/psearch/psearch.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("psearch").join("psearch.log")
    } else {
        PathBuf::from("psearch.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/psearch/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("psearch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PSEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/psearch/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        cookie: config.cookie.or(defaults.cookie),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        fallback_dataset: config.fallback_dataset.or(defaults.fallback_dataset),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `PSEARCH_ENDPOINT` and `PSEARCH_COOKIE`. Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(endpoint) = non_empty_env(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }

    if let Some(cookie) = non_empty_env(ENV_COOKIE) {
        config.cookie = Some(cookie);
    }

    config
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are passed as `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    dataset_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(dataset) = dataset_override {
        config.fallback_dataset = Some(dataset);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
