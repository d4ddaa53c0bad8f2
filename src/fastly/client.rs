//! Fastly Client
//!
//! Main client for the Fastly management API, combining the API key, the
//! endpoint and the HTTP wrapper. Resource modules add their operations to
//! [`Client`] in their own `impl` blocks.

use super::auth::{self, ApiKey, DEFAULT_ENDPOINT};
use super::error::{FastlyError, Result};
use super::http::FastlyHttpClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Fastly client
///
/// The transport is internal; inject a custom one with [`Client::with_http`].
///
/// ```compile_fail
/// use fastly_mgmt::fastly::{ApiKey, Client};
///
/// let client = Client::new(ApiKey::new("key")).unwrap();
/// let _transport = &client.http;
/// ```
#[derive(Clone)]
pub struct Client {
    http: FastlyHttpClient,
    api_key: ApiKey,
    endpoint: String,
}

/// Body returned by delete and action endpoints
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    msg: Option<String>,
}

impl Client {
    /// Create a client for the default endpoint
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Create a client for a custom endpoint (staging, mock servers)
    pub fn with_endpoint(api_key: ApiKey, endpoint: &str) -> Result<Self> {
        let http = FastlyHttpClient::new()?;
        Self::with_http(api_key, endpoint, http)
    }

    /// Create a client around a preconfigured HTTP wrapper
    pub fn with_http(api_key: ApiKey, endpoint: &str, http: FastlyHttpClient) -> Result<Self> {
        if !api_key.is_valid() {
            return Err(FastlyError::Config("API key is empty or malformed".to_string()));
        }

        let parsed = Url::parse(endpoint)?;
        if parsed.cannot_be_a_base() {
            return Err(FastlyError::Config(format!("endpoint {} cannot be a base URL", endpoint)));
        }

        Ok(Self {
            http,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from `FASTLY_API_KEY` and `FASTLY_API_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = auth::get_default_api_key().ok_or_else(|| {
            FastlyError::Config(format!("{} is not set", auth::API_KEY_ENV))
        })?;
        let endpoint = auth::get_default_endpoint().unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(api_key, &endpoint)
    }

    /// The endpoint requests are sent to, without a trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build an absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.endpoint, path)
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }

    /// GET a path and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.http.get(&self.url(path), &self.api_key).await?;
        decode(&body)
    }

    /// POST a form to a path and decode the JSON body
    pub async fn post_form<T, F>(&self, path: &str, form: Option<&F>) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let body = self.http.post_form(&self.url(path), &self.api_key, form).await?;
        decode(&body)
    }

    /// PUT a form to a path and decode the JSON body
    pub async fn put_form<T, F>(&self, path: &str, form: Option<&F>) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let body = self.http.put_form(&self.url(path), &self.api_key, form).await?;
        decode(&body)
    }

    /// DELETE a path and decode the JSON body
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.http.delete(&self.url(path), &self.api_key).await?;
        decode(&body)
    }

    /// DELETE a path that answers `{"status": "ok"}`
    pub async fn delete_ok(&self, path: &str) -> Result<()> {
        let body = self.http.delete(&self.url(path), &self.api_key).await?;
        expect_ok(&body)
    }

    /// POST to an action path that answers `{"status": "ok"}`
    pub async fn post_ok(&self, path: &str) -> Result<()> {
        let body = self
            .http
            .post_form::<[(&str, &str)]>(&self.url(path), &self.api_key, None)
            .await?;
        expect_ok(&body)
    }
}

/// Decode a JSON body; an empty body decodes as `null`
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_str(body)?)
}

/// Check a `{"status": "ok"}` body; an empty body counts as ok
fn expect_ok(body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    let response: StatusResponse = serde_json::from_str(body)?;
    if response.status == "ok" {
        Ok(())
    } else {
        Err(FastlyError::NotOk(
            response.msg.unwrap_or_else(|| response.status.clone()),
        ))
    }
}

// =========================================================================
// Path helpers
// =========================================================================

/// Escape a single path segment
pub fn escape(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// `/service/{id}`
pub fn service_path(service_id: &str) -> String {
    format!("/service/{}", escape(service_id))
}

/// `/service/{id}/version/{n}`
pub fn version_path(service_id: &str, version: u32) -> String {
    format!("{}/version/{}", service_path(service_id), version)
}

/// `/service/{id}/version/{n}/{kind}`
pub fn versioned_path(service_id: &str, version: u32, kind: &str) -> String {
    format!("{}/{}", version_path(service_id, version), kind)
}

/// `/service/{id}/version/{n}/{kind}/{name}`
pub fn named_path(service_id: &str, version: u32, kind: &str, name: &str) -> String {
    format!("{}/{}", versioned_path(service_id, version, kind), escape(name))
}

// =========================================================================
// Validation
// =========================================================================

pub(crate) fn require_service(service_id: &str) -> Result<()> {
    if service_id.is_empty() {
        return Err(FastlyError::MissingService);
    }
    Ok(())
}

pub(crate) fn require_version(version: u32) -> Result<()> {
    if version == 0 {
        return Err(FastlyError::MissingVersion);
    }
    Ok(())
}

pub(crate) fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FastlyError::MissingName);
    }
    Ok(())
}

/// Service then version
pub(crate) fn require_versioned(service_id: &str, version: u32) -> Result<()> {
    require_service(service_id)?;
    require_version(version)
}

/// Service, version, then name
pub(crate) fn require_named(service_id: &str, version: u32, name: &str) -> Result<()> {
    require_versioned(service_id, version)?;
    require_name(name)
}
