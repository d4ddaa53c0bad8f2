//! Backends
//!
//! Origins Fastly fetches content from.

use super::client::Client;
use super::compat::{opt_bool, opt_timestamp, opt_u32, string_weak, u32_weak, Compatibool};
use super::error::Result;
use super::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A backend (origin server) of a service version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Backend {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub port: Option<u32>,
    #[serde(default)]
    pub override_host: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub connect_timeout: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub max_conn: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub error_threshold: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub first_byte_timeout: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub between_bytes_timeout: Option<u32>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub auto_loadbalance: Option<bool>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub weight: Option<u32>,
    #[serde(default)]
    pub request_condition: Option<String>,
    #[serde(default)]
    pub healthcheck: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub shield: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub use_ssl: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub ssl_check_cert: Option<bool>,
    #[serde(default)]
    pub ssl_ca_cert: Option<String>,
    #[serde(default)]
    pub ssl_client_cert: Option<String>,
    #[serde(default)]
    pub ssl_client_key: Option<String>,
    #[serde(default)]
    pub ssl_hostname: Option<String>,
    #[serde(default)]
    pub ssl_cert_hostname: Option<String>,
    #[serde(default)]
    pub ssl_sni_hostname: Option<String>,
    #[serde(default)]
    pub min_tls_version: Option<String>,
    #[serde(default)]
    pub max_tls_version: Option<String>,
    #[serde(default)]
    pub ssl_ciphers: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for Backend {
    const KIND: &'static str = "backend";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Writable backend fields; unset fields are left out of the form
#[derive(Debug, Clone, Default, Serialize)]
pub struct BackendFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_conn: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_byte_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub between_bytes_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_loadbalance: Option<Compatibool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<Compatibool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_check_cert: Option<Compatibool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ca_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_client_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_client_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_sni_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tls_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tls_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ciphers: Option<String>,
}

pub type ListBackendsInput = VersionRef;
pub type CreateBackendInput = CreateInput<BackendFields>;
pub type GetBackendInput = NameRef;
pub type UpdateBackendInput = UpdateInput<BackendFields>;
pub type DeleteBackendInput = NameRef;

impl Client {
    /// List all backends of a version, sorted by name
    pub async fn list_backends(&self, input: &ListBackendsInput) -> Result<Vec<Backend>> {
        self.list_versioned(input).await
    }

    pub async fn create_backend(&self, input: &CreateBackendInput) -> Result<Backend> {
        self.create_versioned(input).await
    }

    pub async fn get_backend(&self, input: &GetBackendInput) -> Result<Backend> {
        self.get_versioned(input).await
    }

    pub async fn update_backend(&self, input: &UpdateBackendInput) -> Result<Backend> {
        self.update_versioned(input).await
    }

    pub async fn delete_backend(&self, input: &DeleteBackendInput) -> Result<()> {
        self.delete_versioned::<Backend>(input).await
    }
}
