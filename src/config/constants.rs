//! Configuration constants.
//!
//! This module defines the default values used by both tools. Every value
//! here can be overridden from the command line or by building the config
//! structs directly.

use std::time::Duration;

// Low-activity filter
/// CSV file read by the low-activity filter
pub const DEFAULT_INPUT_FILE: &str = "users.csv";
/// Users with fewer actions than this are reported
pub const DEFAULT_ACTIONS_THRESHOLD: f64 = 1000.0;
/// Column holding the per-user action count
pub const ACTIONS_COLUMN: &str = "actions";
/// Column holding the user's email address
pub const EMAIL_COLUMN: &str = "email";

// Admin users API
/// Base URL of the web application
pub const DEFAULT_BASE_URL: &str = "https://coilearn.com";
/// Path of the paginated admin users listing
pub const DEFAULT_USERS_ENDPOINT: &str = "/api/admin/users";
/// Page size sent as the `limit` query parameter
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Pause between page requests, in milliseconds
pub const DEFAULT_PAGE_DELAY_MS: u64 = 200;
/// Pause between page requests
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(DEFAULT_PAGE_DELAY_MS);
/// CSV file written by the export
pub const DEFAULT_OUTPUT_FILE: &str = "users.csv";
/// Environment variable holding the bearer token (also read from `.env`)
pub const TOKEN_ENV_VAR: &str = "ADMIN_API_TOKEN";

// Wire names
/// Query parameter carrying the page size
pub const QUERY_LIMIT: &str = "limit";
/// Query parameter carrying the pagination cursor
pub const QUERY_LAST_ID: &str = "lastId";
/// Record field used as the pagination cursor
pub const ID_FIELD: &str = "id";

/// User-Agent sent with every API request.
pub const USER_AGENT: &str = concat!("user_admin/", env!("CARGO_PKG_VERSION"));

/// Maximum number of response body characters kept in an error message.
/// Admin endpoints sometimes answer with full HTML error pages.
pub const MAX_ERROR_BODY_CHARS: usize = 2000;
