//! Application configuration and constants.
//!
//! This module provides:
//! - Default values for both tools (files, thresholds, API location, paging)
//! - Logging option types shared with the CLI
//! - Library configuration structs for the filter and export tools
//! - The `clap` command line that builds those structs

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use cli::{Cli, Command, ExportArgs, LowActivityArgs};
pub use types::{ExportConfig, FilterConfig, LogFormat, LogLevel};
