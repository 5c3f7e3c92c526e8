//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading the
//! request-forgery token the server renders into the page.

use crate::shared::config::{self, API_BASE_META, CSRF_TOKEN_META};

/// Get the base URL for API requests
///
/// # Returns
/// - Value of `<meta name="dashboard-api-base">` without a trailing slash
/// - Empty string (same-origin requests) if the tag is absent
pub fn api_base() -> String {
    config::meta_content(API_BASE_META)
        .map(|base| config::normalize_api_base(&base))
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/parts/АСЦБ-000475");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// CSRF token from `<meta name="csrf-token">`
///
/// Missing tag gives an empty token; the server will reject the POST,
/// which is the same outcome as a stale token.
pub fn csrf_token() -> String {
    match config::meta_content(CSRF_TOKEN_META) {
        Some(token) => token,
        None => {
            log::warn!("meta[name=\"{}\"] not found, forms will post an empty token", CSRF_TOKEN_META);
            String::new()
        }
    }
}
