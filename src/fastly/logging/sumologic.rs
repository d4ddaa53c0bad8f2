//! Sumo Logic logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sumologic {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message_type: Option<String>,
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

impl VersionedResource for Sumologic {
    const KIND: &'static str = "logging/sumologic";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SumologicFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListSumologicsInput = VersionRef;
pub type CreateSumologicInput = CreateInput<SumologicFields>;
pub type GetSumologicInput = NameRef;
pub type UpdateSumologicInput = UpdateInput<SumologicFields>;
pub type DeleteSumologicInput = NameRef;

impl Client {
    pub async fn list_sumologics(&self, input: &ListSumologicsInput) -> Result<Vec<Sumologic>> {
        self.list_versioned(input).await
    }

    pub async fn create_sumologic(&self, input: &CreateSumologicInput) -> Result<Sumologic> {
        self.create_versioned(input).await
    }

    pub async fn get_sumologic(&self, input: &GetSumologicInput) -> Result<Sumologic> {
        self.get_versioned(input).await
    }

    pub async fn update_sumologic(&self, input: &UpdateSumologicInput) -> Result<Sumologic> {
        self.update_versioned(input).await
    }

    pub async fn delete_sumologic(&self, input: &DeleteSumologicInput) -> Result<()> {
        self.delete_versioned::<Sumologic>(input).await
    }
}
