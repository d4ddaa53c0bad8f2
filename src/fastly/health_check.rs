//! Health checks
//!
//! Probes Fastly sends to backends to decide whether they are healthy.

use super::client::Client;
use super::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use super::error::Result;
use super::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub http_version: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub timeout: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub check_interval: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub expected_response: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub window: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub threshold: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub initial: Option<u32>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for HealthCheck {
    const KIND: &'static str = "healthcheck";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthCheckFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_response: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<u32>,
}

pub type ListHealthChecksInput = VersionRef;
pub type CreateHealthCheckInput = CreateInput<HealthCheckFields>;
pub type GetHealthCheckInput = NameRef;
pub type UpdateHealthCheckInput = UpdateInput<HealthCheckFields>;
pub type DeleteHealthCheckInput = NameRef;

impl Client {
    pub async fn list_health_checks(&self, input: &ListHealthChecksInput) -> Result<Vec<HealthCheck>> {
        self.list_versioned(input).await
    }

    pub async fn create_health_check(&self, input: &CreateHealthCheckInput) -> Result<HealthCheck> {
        self.create_versioned(input).await
    }

    pub async fn get_health_check(&self, input: &GetHealthCheckInput) -> Result<HealthCheck> {
        self.get_versioned(input).await
    }

    pub async fn update_health_check(&self, input: &UpdateHealthCheckInput) -> Result<HealthCheck> {
        self.update_versioned(input).await
    }

    pub async fn delete_health_check(&self, input: &DeleteHealthCheckInput) -> Result<()> {
        self.delete_versioned::<HealthCheck>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_health_check() {
        let check: HealthCheck = serde_json::from_value(json!({
            "service_id": "abc",
            "version": 1,
            "name": "ping",
            "method": "HEAD",
            "path": "/health",
            "http_version": "1.1",
            "timeout": 5000,
            "check_interval": "60000",
            "expected_response": 200,
            "window": 5,
            "threshold": 3,
            "initial": 2
        }))
        .unwrap();

        assert_eq!(check.method.as_deref(), Some("HEAD"));
        assert_eq!(check.check_interval, Some(60000));
        assert_eq!(check.expected_response, Some(200));
    }
}
