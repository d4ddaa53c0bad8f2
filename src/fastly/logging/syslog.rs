//! Syslog logging endpoints

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_bool, opt_timestamp, opt_u32, string_weak, u32_weak, Compatibool};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Syslog {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub port: Option<u32>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub use_tls: Option<bool>,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub tls_ca_cert: Option<String>,
    #[serde(default)]
    pub tls_hostname: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
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

impl VersionedResource for Syslog {
    const KIND: &'static str = "logging/syslog";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyslogFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tls: Option<Compatibool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
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

pub type ListSyslogsInput = VersionRef;
pub type CreateSyslogInput = CreateInput<SyslogFields>;
pub type GetSyslogInput = NameRef;
pub type UpdateSyslogInput = UpdateInput<SyslogFields>;
pub type DeleteSyslogInput = NameRef;

impl Client {
    pub async fn list_syslogs(&self, input: &ListSyslogsInput) -> Result<Vec<Syslog>> {
        self.list_versioned(input).await
    }

    pub async fn create_syslog(&self, input: &CreateSyslogInput) -> Result<Syslog> {
        self.create_versioned(input).await
    }

    pub async fn get_syslog(&self, input: &GetSyslogInput) -> Result<Syslog> {
        self.get_versioned(input).await
    }

    pub async fn update_syslog(&self, input: &UpdateSyslogInput) -> Result<Syslog> {
        self.update_versioned(input).await
    }

    pub async fn delete_syslog(&self, input: &DeleteSyslogInput) -> Result<()> {
        self.delete_versioned::<Syslog>(input).await
    }
}
