//! Rackspace Cloud Files logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cloudfiles {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub gzip_level: Option<u32>,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub timestamp_format: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
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

impl VersionedResource for Cloudfiles {
    const KIND: &'static str = "logging/cloudfiles";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudfilesFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListCloudfilesInput = VersionRef;
pub type CreateCloudfilesInput = CreateInput<CloudfilesFields>;
pub type GetCloudfilesInput = NameRef;
pub type UpdateCloudfilesInput = UpdateInput<CloudfilesFields>;
pub type DeleteCloudfilesInput = NameRef;

impl Client {
    pub async fn list_cloudfiles(&self, input: &ListCloudfilesInput) -> Result<Vec<Cloudfiles>> {
        self.list_versioned(input).await
    }

    pub async fn create_cloudfiles(&self, input: &CreateCloudfilesInput) -> Result<Cloudfiles> {
        self.create_versioned(input).await
    }

    pub async fn get_cloudfiles(&self, input: &GetCloudfilesInput) -> Result<Cloudfiles> {
        self.get_versioned(input).await
    }

    pub async fn update_cloudfiles(&self, input: &UpdateCloudfilesInput) -> Result<Cloudfiles> {
        self.update_versioned(input).await
    }

    pub async fn delete_cloudfiles(&self, input: &DeleteCloudfilesInput) -> Result<()> {
        self.delete_versioned::<Cloudfiles>(input).await
    }
}
