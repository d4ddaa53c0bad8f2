//! Amazon S3 logging endpoints
//!
//! Log files are batched per `period` seconds and optionally gzipped before
//! upload.

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_non_empty, opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage class for uploaded log files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum S3Redundancy {
    Standard,
    ReducedRedundancy,
    /// A class this client does not know by name
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct S3 {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
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
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub redundancy: Option<S3Redundancy>,
    #[serde(default)]
    pub timestamp_format: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub server_side_encryption: Option<String>,
    #[serde(default)]
    pub server_side_encryption_kms_key_id: Option<String>,
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

impl VersionedResource for S3 {
    const KIND: &'static str = "logging/s3";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct S3Fields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
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
    pub redundancy: Option<S3Redundancy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListS3sInput = VersionRef;
pub type CreateS3Input = CreateInput<S3Fields>;
pub type GetS3Input = NameRef;
pub type UpdateS3Input = UpdateInput<S3Fields>;
pub type DeleteS3Input = NameRef;

impl Client {
    pub async fn list_s3s(&self, input: &ListS3sInput) -> Result<Vec<S3>> {
        self.list_versioned(input).await
    }

    pub async fn create_s3(&self, input: &CreateS3Input) -> Result<S3> {
        self.create_versioned(input).await
    }

    pub async fn get_s3(&self, input: &GetS3Input) -> Result<S3> {
        self.get_versioned(input).await
    }

    pub async fn update_s3(&self, input: &UpdateS3Input) -> Result<S3> {
        self.update_versioned(input).await
    }

    pub async fn delete_s3(&self, input: &DeleteS3Input) -> Result<()> {
        self.delete_versioned::<S3>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_s3() {
        let s3: S3 = serde_json::from_value(json!({
            "service_id": "abc",
            "version": "1",
            "name": "archive",
            "bucket_name": "logs",
            "domain": "s3.amazonaws.com",
            "period": "3600",
            "gzip_level": 9,
            "redundancy": "reduced_redundancy",
            "format_version": "2",
            "server_side_encryption": null
        }))
        .unwrap();

        assert_eq!(s3.period, Some(3600));
        assert_eq!(s3.gzip_level, Some(9));
        assert_eq!(s3.redundancy, Some(S3Redundancy::ReducedRedundancy));
        assert_eq!(s3.format_version, Some(2));
        assert!(s3.server_side_encryption.is_none());
    }

    #[test]
    fn test_redundancy_form_value() {
        let fields = S3Fields {
            redundancy: Some(S3Redundancy::Standard),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&fields).unwrap(), json!({ "redundancy": "standard" }));
    }

    #[test]
    fn test_redundancy_tolerates_empty_and_unknown() {
        let items: Vec<S3> = serde_json::from_value(json!([
            { "name": "a", "redundancy": "standard" },
            { "name": "b", "redundancy": "" },
            { "name": "c", "redundancy": "glacier" }
        ]))
        .unwrap();

        assert_eq!(items[0].redundancy, Some(S3Redundancy::Standard));
        assert_eq!(items[1].redundancy, None);
        assert_eq!(items[2].redundancy, Some(S3Redundancy::Other("glacier".into())));

        let fields = S3Fields {
            redundancy: Some(S3Redundancy::Other("glacier".into())),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&fields).unwrap(), json!({ "redundancy": "glacier" }));
    }
}
