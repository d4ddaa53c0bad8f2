//! Logentries logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_bool, opt_timestamp, opt_u32, string_weak, u32_weak, Compatibool};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logentries {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_u32")]
    pub port: Option<u32>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub use_tls: Option<bool>,
    #[serde(default)]
    pub token: Option<String>,
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

impl VersionedResource for Logentries {
    const KIND: &'static str = "logging/logentries";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LogentriesFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tls: Option<Compatibool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListLogentriesInput = VersionRef;
pub type CreateLogentriesInput = CreateInput<LogentriesFields>;
pub type GetLogentriesInput = NameRef;
pub type UpdateLogentriesInput = UpdateInput<LogentriesFields>;
pub type DeleteLogentriesInput = NameRef;

impl Client {
    pub async fn list_logentries(&self, input: &ListLogentriesInput) -> Result<Vec<Logentries>> {
        self.list_versioned(input).await
    }

    pub async fn create_logentries(&self, input: &CreateLogentriesInput) -> Result<Logentries> {
        self.create_versioned(input).await
    }

    pub async fn get_logentries(&self, input: &GetLogentriesInput) -> Result<Logentries> {
        self.get_versioned(input).await
    }

    pub async fn update_logentries(&self, input: &UpdateLogentriesInput) -> Result<Logentries> {
        self.update_versioned(input).await
    }

    pub async fn delete_logentries(&self, input: &DeleteLogentriesInput) -> Result<()> {
        self.delete_versioned::<Logentries>(input).await
    }
}
