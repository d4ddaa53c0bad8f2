//! Google Cloud Storage logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gcs {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub gzip_level: Option<u32>,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub timestamp_format: Option<String>,
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

impl VersionedResource for Gcs {
    const KIND: &'static str = "logging/gcs";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GcsFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListGcsInput = VersionRef;
pub type CreateGcsInput = CreateInput<GcsFields>;
pub type GetGcsInput = NameRef;
pub type UpdateGcsInput = UpdateInput<GcsFields>;
pub type DeleteGcsInput = NameRef;

impl Client {
    pub async fn list_gcs(&self, input: &ListGcsInput) -> Result<Vec<Gcs>> {
        self.list_versioned(input).await
    }

    pub async fn create_gcs(&self, input: &CreateGcsInput) -> Result<Gcs> {
        self.create_versioned(input).await
    }

    pub async fn get_gcs(&self, input: &GetGcsInput) -> Result<Gcs> {
        self.get_versioned(input).await
    }

    pub async fn update_gcs(&self, input: &UpdateGcsInput) -> Result<Gcs> {
        self.update_versioned(input).await
    }

    pub async fn delete_gcs(&self, input: &DeleteGcsInput) -> Result<()> {
        self.delete_versioned::<Gcs>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_gcs() {
        let gcs: Gcs = serde_json::from_value(json!({
            "name": "bucket",
            "bucket_name": "cdn-logs",
            "path": "/edge/",
            "gzip_level": "9",
            "format_version": 2
        }))
        .unwrap();

        assert_eq!(Gcs::KIND, "logging/gcs");
        assert_eq!(gcs.bucket_name.as_deref(), Some("cdn-logs"));
        assert_eq!(gcs.gzip_level, Some(9));
        assert_eq!(gcs.format_version, Some(2));
    }

    #[test]
    fn test_rename_form() {
        let input = UpdateGcsInput::new("abc", 1, "bucket", GcsFields::default()).rename("bucket-2");
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "name": "bucket-2" }));
    }
}
