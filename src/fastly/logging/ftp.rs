//! FTP logging endpoints
//!
//! Uploads batched log files to an FTP server, optionally PGP encrypted with
//! `public_key`.

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ftp {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub port: Option<u32>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub gzip_level: Option<u32>,
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

impl VersionedResource for Ftp {
    const KIND: &'static str = "logging/ftp";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Writable FTP endpoint fields; unset fields are left out of the form
#[derive(Debug, Clone, Default, Serialize)]
pub struct FtpFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip_level: Option<u32>,
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

pub type ListFtpsInput = VersionRef;
pub type CreateFtpInput = CreateInput<FtpFields>;
pub type GetFtpInput = NameRef;
pub type UpdateFtpInput = UpdateInput<FtpFields>;
pub type DeleteFtpInput = NameRef;

impl Client {
    pub async fn list_ftps(&self, input: &ListFtpsInput) -> Result<Vec<Ftp>> {
        self.list_versioned(input).await
    }

    pub async fn create_ftp(&self, input: &CreateFtpInput) -> Result<Ftp> {
        self.create_versioned(input).await
    }

    pub async fn get_ftp(&self, input: &GetFtpInput) -> Result<Ftp> {
        self.get_versioned(input).await
    }

    pub async fn update_ftp(&self, input: &UpdateFtpInput) -> Result<Ftp> {
        self.update_versioned(input).await
    }

    pub async fn delete_ftp(&self, input: &DeleteFtpInput) -> Result<()> {
        self.delete_versioned::<Ftp>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ftp() {
        let ftp: Ftp = serde_json::from_value(json!({
            "name": "archive",
            "address": "ftp.example.com",
            "port": "21",
            "username": "anonymous",
            "period": 3600,
            "gzip_level": null
        }))
        .unwrap();

        assert_eq!(Ftp::KIND, "logging/ftp");
        assert_eq!(ftp.port, Some(21));
        assert_eq!(ftp.period, Some(3600));
        assert!(ftp.gzip_level.is_none());
    }

    #[test]
    fn test_create_form() {
        let input = CreateFtpInput::new(
            "abc",
            1,
            "archive",
            FtpFields {
                address: Some("ftp.example.com".into()),
                port: Some(21),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "archive", "address": "ftp.example.com", "port": 21 })
        );
    }
}
