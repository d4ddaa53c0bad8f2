//! Fastly API errors
//!
//! Every operation validates its required identifiers before touching the
//! network and reports the first missing one as a dedicated variant. Anything
//! that goes wrong after that (transport, HTTP status, decoding) is carried
//! through unchanged.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type using FastlyError
pub type Result<T> = std::result::Result<T, FastlyError>;

/// Errors returned by the Fastly client
#[derive(Debug, Error)]
pub enum FastlyError {
    #[error("missing required field 'Service'")]
    MissingService,

    #[error("missing required field 'Version'")]
    MissingVersion,

    #[error("missing required field 'Name'")]
    MissingName,

    #[error("missing required field 'Director'")]
    MissingDirector,

    #[error("missing required field 'Backend'")]
    MissingBackend,

    #[error("missing required field 'ID'")]
    MissingId,

    #[error("missing required field 'TokenID'")]
    MissingTokenId,

    #[error("missing required field 'CustomerID'")]
    MissingCustomerId,

    #[error("missing required field 'Login'")]
    MissingLogin,

    /// The API answered with a non-success status
    #[error("{status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
        detail: Option<String>,
    },

    /// An action endpoint answered 2xx but without `"status": "ok"`
    #[error("operation not ok: {0}")]
    NotOk(String),

    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FastlyError {
    /// True for the "missing required field" family
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            FastlyError::MissingService
                | FastlyError::MissingVersion
                | FastlyError::MissingName
                | FastlyError::MissingDirector
                | FastlyError::MissingBackend
                | FastlyError::MissingId
                | FastlyError::MissingTokenId
                | FastlyError::MissingCustomerId
                | FastlyError::MissingLogin
        )
    }

    /// HTTP status of the failed call, if the API answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FastlyError::Http { status, .. } => Some(*status),
            FastlyError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Build an HTTP error from a status and the raw response body.
    ///
    /// Fastly error bodies look like `{"msg": "...", "detail": "..."}`; when the
    /// body is not in that shape the canonical reason phrase is used instead.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            msg: Option<String>,
            #[serde(default)]
            detail: Option<String>,
        }

        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.msg.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
        let detail = parsed.and_then(|b| b.detail).filter(|d| !d.is_empty());

        FastlyError::Http {
            status,
            message,
            detail,
        }
    }
}

/// Format a Fastly API error for display
pub fn format_fastly_error(error: &FastlyError) -> String {
    if error.is_missing_field() {
        return error.to_string();
    }

    match error.status().map(|s| s.as_u16()) {
        Some(401) => "Authentication failed. Check FASTLY_API_KEY or --api-key.".to_string(),
        Some(403) => "Permission denied. The API token lacks the required scope.".to_string(),
        Some(404) => "Resource not found.".to_string(),
        Some(409) => "Resource conflict. The resource may already exist.".to_string(),
        Some(429) => "Rate limit exceeded. Please try again later.".to_string(),
        Some(500) | Some(503) => "Fastly API temporarily unavailable. Please try again.".to_string(),
        _ => match error {
            FastlyError::Http {
                message,
                detail: Some(detail),
                ..
            } => format!("{}: {}", message, detail),
            FastlyError::Http { message, .. } => message.clone(),
            FastlyError::Transport(_) => {
                "Request failed. Check your network connection and try again.".to_string()
            }
            other => other.to_string(),
        },
    }
}
