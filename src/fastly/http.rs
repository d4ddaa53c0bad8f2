//! HTTP utilities for Fastly REST API calls

use super::auth::{ApiKey, API_KEY_HEADER};
use super::error::{FastlyError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("fastly-mgmt/", env!("CARGO_PKG_VERSION"));

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Fastly API calls
#[derive(Clone)]
pub struct FastlyHttpClient {
    client: Client,
}

impl FastlyHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (custom timeouts, proxies)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn request(&self, method: Method, url: &str, key: &ApiKey) -> Result<RequestBuilder> {
        let mut value = HeaderValue::from_str(key.as_str())
            .map_err(|_| FastlyError::Config("API key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(self.client.request(method, url).header(API_KEY_HEADER, value))
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, method: Method, request: RequestBuilder, url: &str) -> Result<String> {
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} {} -> {} - {}", method, url, status, sanitize_for_log(&body));
            return Err(FastlyError::from_response(status, &body));
        }

        tracing::trace!("{} {} -> {}", method, url, status);
        Ok(body)
    }

    /// Make a GET request to the Fastly API
    pub async fn get(&self, url: &str, key: &ApiKey) -> Result<String> {
        tracing::debug!("GET {}", url);
        let request = self.request(Method::GET, url, key)?;
        self.send(Method::GET, request, url).await
    }

    /// Make a form-encoded POST request to the Fastly API
    pub async fn post_form<F>(&self, url: &str, key: &ApiKey, form: Option<&F>) -> Result<String>
    where
        F: Serialize + ?Sized,
    {
        tracing::debug!("POST {}", url);
        let mut request = self.request(Method::POST, url, key)?;
        if let Some(form) = form {
            request = request.form(form);
        }
        self.send(Method::POST, request, url).await
    }

    /// Make a form-encoded PUT request to the Fastly API
    pub async fn put_form<F>(&self, url: &str, key: &ApiKey, form: Option<&F>) -> Result<String>
    where
        F: Serialize + ?Sized,
    {
        tracing::debug!("PUT {}", url);
        let mut request = self.request(Method::PUT, url, key)?;
        if let Some(form) = form {
            request = request.form(form);
        }
        self.send(Method::PUT, request, url).await
    }

    /// Make a DELETE request to the Fastly API
    pub async fn delete(&self, url: &str, key: &ApiKey) -> Result<String> {
        tracing::debug!("DELETE {}", url);
        let request = self.request(Method::DELETE, url, key)?;
        self.send(Method::DELETE, request, url).await
    }
}
