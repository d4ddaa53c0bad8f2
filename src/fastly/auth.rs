//! Fastly Authentication
//!
//! The management API authenticates every request with an API token sent in
//! the `Fastly-Key` header. This module holds the token and resolves it (and
//! the API endpoint) from the environment.

use std::fmt;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.fastly.com";

/// Environment variable holding the API token
pub const API_KEY_ENV: &str = "FASTLY_API_KEY";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV: &str = "FASTLY_API_URL";

/// Header the token is sent in
pub const API_KEY_HEADER: &str = "Fastly-Key";

/// Fastly API token
///
/// `Debug` never prints the value so the key cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        validate_api_key(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Validate an API token's shape
/// Tokens are non-empty printable ASCII without whitespace
pub fn validate_api_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_graphic())
}

/// Read the API token from the environment
/// Security: rejects malformed values instead of sending them as a header
pub fn get_default_api_key() -> Option<ApiKey> {
    let key = std::env::var(API_KEY_ENV).ok()?;
    let key = key.trim();
    if validate_api_key(key) {
        return Some(ApiKey::new(key));
    }
    tracing::warn!("Invalid API key format in {}", API_KEY_ENV);
    None
}

/// Read the API endpoint from the environment
pub fn get_default_endpoint() -> Option<String> {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
