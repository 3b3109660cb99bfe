//! Build-time client configuration.
//!
//! The backend base URL is baked into the WASM bundle from the
//! `COURSEAPP_API_BASE` environment variable at compile time, falling back to
//! the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `COURSEAPP_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Base URL of the backend REST service, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("COURSEAPP_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
