//! Admin users API requests.
//!
//! One call fetches one page: `GET <endpoint>?limit=<n>[&lastId=<cursor>]`
//! with a bearer token. Anything but `200 OK` is an error.

use anyhow::{Context, Result};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::{QUERY_LAST_ID, QUERY_LIMIT};
use crate::error_handling::ApiError;
use crate::fetch::{Cursor, UserRecord};
use crate::utils::sanitize_and_truncate_body;

/// Body of a successful listing response.
///
/// A missing or `null` `users` key is an empty page.
#[derive(Debug, Deserialize)]
struct UsersPage {
    #[serde(default)]
    users: Option<Vec<UserRecord>>,
}

/// Builds the listing URL from a base URL and an endpoint path.
///
/// The path is appended to the base as-is (a base with its own path prefix,
/// such as `https://host/app`, keeps it), with exactly one `/` between them.
///
/// # Errors
///
/// Returns `ApiError::InvalidEndpoint` if the result is not a valid URL.
pub fn users_endpoint(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ApiError::InvalidEndpoint(joined.clone(), e))
}

/// Fetches one page of users.
///
/// Sends `limit` always and `lastId` only when a cursor is given, together
/// with `Authorization: Bearer <token>` and `Content-Type: application/json`.
///
/// # Errors
///
/// - `ApiError::UnexpectedStatus` for any status other than 200, carrying the
///   status code and the (sanitized) body text
/// - transport errors (connect failure, timeout)
/// - decode errors if the body is not JSON or a `users` entry is not an object
pub async fn fetch_users_page(
    client: &reqwest::Client,
    endpoint: &Url,
    token: &str,
    limit: u32,
    cursor: Option<&Cursor>,
) -> Result<Vec<UserRecord>> {
    let mut request = client
        .get(endpoint.clone())
        .query(&[(QUERY_LIMIT, limit.to_string())]);
    if let Some(cursor) = cursor {
        request = request.query(&[(QUERY_LAST_ID, cursor.as_str())]);
    }

    let response = request
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .with_context(|| format!("Request to {endpoint} failed"))?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = error_body(response.text().await);
        return Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body: sanitize_and_truncate_body(&body),
        }
        .into());
    }

    let page: UsersPage = response
        .json()
        .await
        .context("Failed to decode users page")?;
    let users = page.users.unwrap_or_default();
    debug!(
        "Page after {} returned {} users",
        cursor.map(Cursor::as_str).unwrap_or("<start>"),
        users.len()
    );
    Ok(users)
}

/// Body text for an error report; a failed read leaves a placeholder.
fn error_body(read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|e| {
        debug!("Failed to read error response body: {e}");
        format!("<body unreadable: {e}>")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_passes_text_through() {
        assert_eq!(error_body(Ok("quota exceeded".to_string())), "quota exceeded");
    }

    #[tokio::test]
    async fn test_error_body_unreadable_placeholder() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .expect_err("relative URL cannot be sent");
        let body = error_body(Err(err));
        assert!(body.starts_with("<body unreadable: "), "{body}");
        assert!(body.ends_with('>'));
    }

    #[test]
    fn test_users_endpoint_joins_with_single_slash() {
        let url = users_endpoint("https://coilearn.com", "/api/admin/users").expect("valid");
        assert_eq!(url.as_str(), "https://coilearn.com/api/admin/users");

        let url = users_endpoint("https://coilearn.com/", "api/admin/users").expect("valid");
        assert_eq!(url.as_str(), "https://coilearn.com/api/admin/users");
    }

    #[test]
    fn test_users_endpoint_keeps_base_path_prefix() {
        let url = users_endpoint("http://localhost:3000/app", "/api/admin/users").expect("valid");
        assert_eq!(url.as_str(), "http://localhost:3000/app/api/admin/users");
    }

    #[test]
    fn test_users_endpoint_rejects_garbage() {
        let err = users_endpoint("not a url", "/api/admin/users").expect_err("invalid");
        assert!(matches!(err, ApiError::InvalidEndpoint(_, _)));
    }

    #[test]
    fn test_users_page_missing_or_null_users() {
        let page: UsersPage = serde_json::from_str("{}").expect("decodes");
        assert!(page.users.unwrap_or_default().is_empty());

        let page: UsersPage = serde_json::from_str("{\"users\":null}").expect("decodes");
        assert!(page.users.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_users_page_rejects_non_object_entries() {
        let result: Result<UsersPage, _> = serde_json::from_str("{\"users\":[1,2]}");
        assert!(result.is_err());
    }

    #[test]
    fn test_users_page_ignores_other_keys() {
        let page: UsersPage =
            serde_json::from_str("{\"users\":[{\"id\":\"a\"}],\"nextCursor\":\"a\"}")
                .expect("decodes");
        assert_eq!(page.users.unwrap_or_default().len(), 1);
    }
}
