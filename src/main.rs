//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `user_admin` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use user_admin::config::{Cli, Command};
use user_admin::initialization::init_logger_with;
use user_admin::{run_export, run_low_activity, ExportConfig, FilterConfig};

/// Loads `.env` from the current directory, falling back to the one next to
/// the executable. Must run before argument parsing so `ADMIN_API_TOKEN` can
/// come from the file.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::LowActivity(args) => {
            let config = FilterConfig::from(args);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_low_activity(&config, &mut out).map(|_| ())
        }
        Command::Export(args) => {
            let config = ExportConfig::from(args);
            run_export(&config).await.map(|report| {
                if report.file_written {
                    println!("\n✅ Export complete → {}", report.output.display());
                    println!("🧾 Columns exported: {}", report.columns.len());
                }
            })
        }
    };

    if let Err(e) = outcome {
        eprintln!("user_admin error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
