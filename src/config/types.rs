//! Configuration types.
//!
//! This module defines the logging enums used for command-line parsing and
//! the library configuration structs for each tool.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ACTIONS_THRESHOLD, DEFAULT_BASE_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_PAGE_DELAY, DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for the low-activity filter.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// CSV file to read users from
    pub input: PathBuf,

    /// Rows with fewer actions than this are reported
    pub threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            threshold: DEFAULT_ACTIONS_THRESHOLD,
        }
    }
}

/// Configuration for the admin users export.
///
/// # Examples
///
/// ```no_run
/// use user_admin::ExportConfig;
///
/// let config = ExportConfig {
///     token: "my-id-token".to_string(),
///     limit: 100,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Base URL of the web application
    pub base_url: String,

    /// Path of the users listing, joined onto `base_url`
    pub endpoint: String,

    /// Bearer token sent in the `Authorization` header
    pub token: String,

    /// Page size
    pub limit: u32,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Pause between page requests
    pub page_delay: Duration,

    /// CSV file to write
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            token: String::new(),
            limit: DEFAULT_PAGE_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            page_delay: DEFAULT_PAGE_DELAY,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_filter_config_default() {
        let config = FilterConfig::default();
        assert_eq!(config.input, PathBuf::from("users.csv"));
        assert_eq!(config.threshold, 1000.0);
    }

    #[test]
    fn test_export_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.base_url, "https://coilearn.com");
        assert_eq!(config.endpoint, "/api/admin/users");
        assert_eq!(config.limit, 50);
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.page_delay, Duration::from_millis(200));
        assert_eq!(config.output, PathBuf::from("users.csv"));
        assert!(config.token.is_empty());
    }
}
