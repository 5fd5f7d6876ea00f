//! Admin users API client.
//!
//! Fetches pages of user records from the admin listing endpoint using
//! cursor pagination: each request after the first carries the `id` of the
//! last user already seen.

mod cursor;
mod request;

use serde_json::{Map, Value};

pub use cursor::{cursor_of, Cursor};
pub use request::{fetch_users_page, users_endpoint};

/// A user as returned by the API: an open-ended field map.
pub type UserRecord = Map<String, Value>;
