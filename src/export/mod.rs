//! Export of all users from the admin API into a CSV file.
//!
//! Pages are fetched one after another, following the `lastId` cursor until
//! the API returns an empty page. Every record is flattened on arrival; the
//! CSV is written only once the whole listing has been fetched.

mod csv;
mod row;
mod types;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::{ExportConfig, TOKEN_ENV_VAR};
use crate::error_handling::{ApiError, ConfigError};
use crate::fetch::{cursor_of, fetch_users_page, users_endpoint, Cursor};
use crate::initialization::init_client;

pub use self::csv::{collect_columns, write_users_csv};
pub use row::{flatten_record, flatten_value, FlatRecord};
pub use types::ExportReport;

/// Exports every user from the admin API to `config.output`.
///
/// # Errors
///
/// Fails without touching the output file if:
/// - no token is configured
/// - the endpoint URL is invalid or the HTTP client cannot be built
/// - any page request fails or returns a non-200 status
/// - a page's last user has no usable `id`, or the cursor stops advancing
///
/// Fails after fetching if the CSV cannot be written.
///
/// # Example
///
/// ```no_run
/// use user_admin::{run_export, ExportConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ExportConfig {
///     token: std::env::var("ADMIN_API_TOKEN")?,
///     ..Default::default()
/// };
/// let report = run_export(&config).await?;
/// println!("{} users, {} columns", report.users, report.columns.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_export(config: &ExportConfig) -> Result<ExportReport> {
    if config.token.is_empty() {
        return Err(ConfigError::MissingToken(TOKEN_ENV_VAR).into());
    }

    let endpoint = users_endpoint(&config.base_url, &config.endpoint)?;
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    info!(
        "Exporting users from {} (page size {})",
        endpoint, config.limit
    );

    let mut all_users: Vec<FlatRecord> = Vec::new();
    let mut cursor: Option<Cursor> = None;
    let mut pages = 0usize;

    loop {
        let users = fetch_users_page(
            &client,
            &endpoint,
            &config.token,
            config.limit,
            cursor.as_ref(),
        )
        .await
        .with_context(|| format!("Failed to fetch users page {}", pages + 1))?;

        if users.is_empty() {
            debug!("Empty page after {} pages, pagination complete", pages);
            break;
        }

        let next = cursor_of(&users)?;
        if cursor.as_ref() == Some(&next) {
            return Err(ApiError::StalledCursor(next.to_string()).into());
        }

        all_users.extend(users.iter().map(flatten_record));
        pages += 1;
        info!(
            "Fetched {} users (total: {})",
            users.len(),
            all_users.len()
        );

        cursor = Some(next);
        tokio::time::sleep(config.page_delay).await;
    }

    if all_users.is_empty() {
        info!("No users found.");
        return Ok(ExportReport {
            pages,
            users: 0,
            columns: Vec::new(),
            output: config.output.clone(),
            file_written: false,
        });
    }

    let columns = collect_columns(&all_users);
    write_users_csv(&config.output, &columns, &all_users)?;
    info!(
        "Wrote {} users with {} columns to {}",
        all_users.len(),
        columns.len(),
        config.output.display()
    );

    Ok(ExportReport {
        pages,
        users: all_users.len(),
        columns,
        output: config.output.clone(),
        file_written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_export_requires_token() {
        let config = ExportConfig::default();
        let err = run_export(&config).await.expect_err("missing token");
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingToken(_))
        ));
    }

    #[tokio::test]
    async fn test_run_export_rejects_invalid_endpoint() {
        let config = ExportConfig {
            base_url: "not a url".to_string(),
            token: "t".to_string(),
            ..Default::default()
        };
        let err = run_export(&config).await.expect_err("bad endpoint");
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::InvalidEndpoint(_, _))
        ));
    }
}
