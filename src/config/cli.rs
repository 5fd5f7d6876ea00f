//! Command-line options.
//!
//! Global logging flags plus one subcommand per tool. Each subcommand's
//! arguments convert into the matching library configuration struct.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_ACTIONS_THRESHOLD, DEFAULT_BASE_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_PAGE_DELAY_MS, DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_ENDPOINT,
    TOKEN_ENV_VAR,
};
use crate::config::types::{ExportConfig, FilterConfig, LogFormat, LogLevel};

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Emails of users with fewer than 1000 actions
/// user_admin low-activity users.csv
///
/// # Export every user (token from ADMIN_API_TOKEN or .env)
/// user_admin export --output users.csv
///
/// # Against a local dev server, JSON logs
/// user_admin --log-format json export --base-url http://localhost:3000 --token "$TOKEN"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "user_admin",
    version,
    about = "Administrative tools for the user database."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Tool to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available tools.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print emails of users with fewer actions than the threshold
    #[command(name = "low-activity")]
    LowActivity(LowActivityArgs),

    /// Export all users from the admin API into a CSV file
    #[command(name = "export")]
    Export(ExportArgs),
}

/// Options for `low-activity`.
#[derive(Debug, Args)]
pub struct LowActivityArgs {
    /// Users CSV to read (needs `email` and `actions` columns)
    #[arg(value_parser, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Users with fewer actions than this are printed
    #[arg(long, default_value_t = DEFAULT_ACTIONS_THRESHOLD)]
    pub threshold: f64,
}

/// Options for `export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// CSV file to write (replaced atomically)
    #[arg(short, long, value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Base URL of the web application
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path of the admin users listing
    #[arg(long, default_value = DEFAULT_USERS_ENDPOINT)]
    pub endpoint: String,

    /// Bearer token for the admin API
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Users per page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pause between page requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
    pub delay_ms: u64,
}

impl From<LowActivityArgs> for FilterConfig {
    fn from(args: LowActivityArgs) -> Self {
        Self {
            input: args.input,
            threshold: args.threshold,
        }
    }
}

impl From<ExportArgs> for ExportConfig {
    fn from(args: ExportArgs) -> Self {
        Self {
            base_url: args.base_url,
            endpoint: args.endpoint,
            token: args.token.unwrap_or_default(),
            limit: args.limit,
            timeout_seconds: args.timeout_seconds,
            page_delay: Duration::from_millis(args.delay_ms),
            output: args.output,
        }
    }
}
