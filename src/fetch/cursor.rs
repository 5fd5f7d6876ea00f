//! Pagination cursor.

use std::fmt;

use serde_json::Value;

use crate::config::ID_FIELD;
use crate::error_handling::ApiError;
use crate::fetch::UserRecord;

/// The `id` of the last user on a page, sent back as `lastId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the cursor for the page after `page`: the last record's `id`.
///
/// String ids are used verbatim; numeric and boolean ids use their JSON text.
///
/// # Errors
///
/// Returns `ApiError::MissingCursor` if the page is empty or the last record
/// has no `id`, or its `id` is null, empty, or structured.
pub fn cursor_of(page: &[UserRecord]) -> Result<Cursor, ApiError> {
    let id = page
        .last()
        .and_then(|record| record.get(ID_FIELD))
        .ok_or(ApiError::MissingCursor)?;

    match id {
        Value::String(s) if !s.is_empty() => Ok(Cursor::new(s.as_str())),
        Value::Number(n) => Ok(Cursor::new(n.to_string())),
        Value::Bool(b) => Ok(Cursor::new(b.to_string())),
        _ => Err(ApiError::MissingCursor),
    }
}
