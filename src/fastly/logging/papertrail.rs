//! Papertrail logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Papertrail destination (`address`:`port`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Papertrail {
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

impl VersionedResource for Papertrail {
    const KIND: &'static str = "logging/papertrail";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PapertrailFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListPapertrailsInput = VersionRef;
pub type CreatePapertrailInput = CreateInput<PapertrailFields>;
pub type GetPapertrailInput = NameRef;
pub type UpdatePapertrailInput = UpdateInput<PapertrailFields>;
pub type DeletePapertrailInput = NameRef;

impl Client {
    pub async fn list_papertrails(&self, input: &ListPapertrailsInput) -> Result<Vec<Papertrail>> {
        self.list_versioned(input).await
    }

    pub async fn create_papertrail(&self, input: &CreatePapertrailInput) -> Result<Papertrail> {
        self.create_versioned(input).await
    }

    pub async fn get_papertrail(&self, input: &GetPapertrailInput) -> Result<Papertrail> {
        self.get_versioned(input).await
    }

    pub async fn update_papertrail(&self, input: &UpdatePapertrailInput) -> Result<Papertrail> {
        self.update_versioned(input).await
    }

    pub async fn delete_papertrail(&self, input: &DeletePapertrailInput) -> Result<()> {
        self.delete_versioned::<Papertrail>(input).await
    }
}
