//! Sanitizing response text before it is placed in error messages.
//!
//! Error bodies from the admin API end up on the terminal, so control
//! characters are stripped and very long bodies (HTML error pages) are cut.

use crate::config::MAX_ERROR_BODY_CHARS;

/// Removes control characters (0x00-0x1F except newline, tab and carriage
/// return) from a message.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7f}')
        .collect()
}

/// Sanitizes a response body and truncates it to `MAX_ERROR_BODY_CHARS`
/// characters, noting the original length when it was cut.
pub fn sanitize_and_truncate_body(body: &str) -> String {
    let sanitized = sanitize_error_message(body);
    let total_chars = sanitized.chars().count();

    if total_chars > MAX_ERROR_BODY_CHARS {
        // leave room for the truncation note
        let keep = MAX_ERROR_BODY_CHARS.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!("{truncated}... (truncated, original length: {total_chars} chars)")
    } else {
        sanitized
    }
}
