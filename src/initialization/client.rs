//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{ExportConfig, USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the admin users API.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from the export configuration
/// - A `user_admin/<version>` User-Agent
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &ExportConfig) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = ExportConfig::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_zero_timeout() {
        let config = ExportConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
