//! Loggly logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loggly {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
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

impl VersionedResource for Loggly {
    const KIND: &'static str = "logging/loggly";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LogglyFields {
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

pub type ListLogglyInput = VersionRef;
pub type CreateLogglyInput = CreateInput<LogglyFields>;
pub type GetLogglyInput = NameRef;
pub type UpdateLogglyInput = UpdateInput<LogglyFields>;
pub type DeleteLogglyInput = NameRef;

impl Client {
    pub async fn list_loggly(&self, input: &ListLogglyInput) -> Result<Vec<Loggly>> {
        self.list_versioned(input).await
    }

    pub async fn create_loggly(&self, input: &CreateLogglyInput) -> Result<Loggly> {
        self.create_versioned(input).await
    }

    pub async fn get_loggly(&self, input: &GetLogglyInput) -> Result<Loggly> {
        self.get_versioned(input).await
    }

    pub async fn update_loggly(&self, input: &UpdateLogglyInput) -> Result<Loggly> {
        self.update_versioned(input).await
    }

    pub async fn delete_loggly(&self, input: &DeleteLogglyInput) -> Result<()> {
        self.delete_versioned::<Loggly>(input).await
    }
}
