//! Splunk HTTP Event Collector logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Splunk {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub tls_ca_cert: Option<String>,
    #[serde(default)]
    pub tls_hostname: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub format_version: Option<u32>,
    #[serde(default)]
    pub response_condition: Option<String>,
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for Splunk {
    const KIND: &'static str = "logging/splunk";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SplunkFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListSplunksInput = VersionRef;
pub type CreateSplunkInput = CreateInput<SplunkFields>;
pub type GetSplunkInput = NameRef;
pub type UpdateSplunkInput = UpdateInput<SplunkFields>;
pub type DeleteSplunkInput = NameRef;

impl Client {
    pub async fn list_splunks(&self, input: &ListSplunksInput) -> Result<Vec<Splunk>> {
        self.list_versioned(input).await
    }

    pub async fn create_splunk(&self, input: &CreateSplunkInput) -> Result<Splunk> {
        self.create_versioned(input).await
    }

    pub async fn get_splunk(&self, input: &GetSplunkInput) -> Result<Splunk> {
        self.get_versioned(input).await
    }

    pub async fn update_splunk(&self, input: &UpdateSplunkInput) -> Result<Splunk> {
        self.update_versioned(input).await
    }

    pub async fn delete_splunk(&self, input: &DeleteSplunkInput) -> Result<()> {
        self.delete_versioned::<Splunk>(input).await
    }
}
