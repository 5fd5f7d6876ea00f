//! user_admin library: administrative tools for the user database.
//!
//! Two independent tools:
//!
//! - **Low-activity filter**: reads a users CSV and reports the email of every
//!   user with fewer `actions` than a threshold.
//! - **Export**: pages through the admin users API with a `lastId` cursor and
//!   writes every user to a CSV file, JSON-encoding nested fields.
//!
//! # Example
//!
//! ```no_run
//! use user_admin::{run_export, run_low_activity, ExportConfig, FilterConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let report = run_low_activity(&FilterConfig::default(), &mut std::io::stdout())?;
//! eprintln!("{} low-activity users", report.emails_printed);
//!
//! let config = ExportConfig {
//!     token: "id-token".to_string(),
//!     ..Default::default()
//! };
//! let report = run_export(&config).await?;
//! eprintln!("Exported {} users", report.users);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The export requires a Tokio runtime. The filter is fully synchronous.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod initialization;
mod utils;

// Re-export public API
pub use config::{ExportConfig, FilterConfig, LogFormat, LogLevel};
pub use export::{run_export, ExportReport};
pub use filter::{run_low_activity, FilterReport};
