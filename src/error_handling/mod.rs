//! Error handling.
//!
//! Typed errors live here; orchestration code wraps them in `anyhow::Error`
//! with context so the binary can print the full chain.

mod types;

// Re-export public API
pub use types::{ApiError, ConfigError, InitializationError};
