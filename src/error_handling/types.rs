//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while talking to the admin users API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with anything other than `200 OK`.
    ///
    /// `body` has control characters stripped and is capped at
    /// `MAX_ERROR_BODY_CHARS` characters, with a note giving the original
    /// length, so an HTML error page cannot flood the terminal.
    #[error("Request failed ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body text, sanitized and capped
        body: String,
    },

    /// The last record of a page has no usable `id`.
    #[error("Last user on the page has no usable \"id\" field to continue pagination")]
    MissingCursor,

    /// The API returned a page ending with the cursor that was just sent.
    #[error("Pagination did not advance past lastId={0}")]
    StalledCursor(String),

    /// The base URL and endpoint path do not form a valid URL.
    #[error("Invalid users endpoint {0:?}: {1}")]
    InvalidEndpoint(String, url::ParseError),
}

/// Errors in user-supplied configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No bearer token was given on the command line or in the environment.
    #[error("No API token provided (use --token or set {0})")]
    MissingToken(&'static str),
}
