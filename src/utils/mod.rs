//! Utility functions.
//!
//! This module provides:
//! - Sanitization and truncation of response text for error messages

pub mod sanitize;

pub use sanitize::sanitize_and_truncate_body;
