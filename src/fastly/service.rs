//! Services
//!
//! The top level configuration unit. A service owns its versions; every other
//! configuration object hangs off a service version.

use super::client::{escape, require_name, require_service, service_path, Client};
use super::compat::{opt_timestamp, opt_u32, string_weak, vec_or_null};
use super::error::Result;
use super::version::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "string_weak")]
    pub id: String,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Number of the active version
    #[serde(default, rename = "version", deserialize_with = "opt_u32")]
    pub active_version: Option<u32>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub versions: Vec<Version>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A service together with its active and latest version details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    #[serde(default, deserialize_with = "string_weak")]
    pub id: String,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub active_version: Option<Version>,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub versions: Vec<Version>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateServiceInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateServiceInput {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Client {
    /// List all services of the account, sorted by name
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let mut services: Vec<Service> = self.get("/service").await?;
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    pub async fn create_service(&self, input: &CreateServiceInput) -> Result<Service> {
        require_name(&input.name)?;
        self.post_form("/service", Some(input)).await
    }

    pub async fn get_service(&self, id: &str) -> Result<Service> {
        require_service(id)?;
        self.get(&service_path(id)).await
    }

    pub async fn get_service_details(&self, id: &str) -> Result<ServiceDetail> {
        require_service(id)?;
        self.get(&format!("{}/details", service_path(id))).await
    }

    pub async fn update_service(&self, input: &UpdateServiceInput) -> Result<Service> {
        require_service(&input.id)?;
        self.put_form(&service_path(&input.id), Some(input)).await
    }

    pub async fn delete_service(&self, id: &str) -> Result<()> {
        require_service(id)?;
        self.delete_ok(&service_path(id)).await
    }

    /// Find a service by its exact name
    pub async fn search_service(&self, name: &str) -> Result<Service> {
        require_name(name)?;
        self.get(&format!("/service/search?name={}", escape(name))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastly::{ApiKey, FastlyError};
    use serde_json::json;

    #[test]
    fn test_decode_service_with_versions() {
        let service: Service = serde_json::from_value(json!({
            "id": "SU1Z0isxPaozGVKXdv0eY",
            "name": "www.example.com",
            "customer_id": "x4xCwxxJxGCx123Rx5xTx",
            "version": 2,
            "versions": [
                { "number": 1, "active": false },
                { "number": 2, "active": true }
            ]
        }))
        .unwrap();

        assert_eq!(service.active_version, Some(2));
        assert_eq!(service.versions.len(), 2);
        assert!(service.versions[1].active);
    }

    #[tokio::test]
    async fn test_service_operations_require_identifiers() {
        let client = Client::with_endpoint(ApiKey::new("k"), "http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.create_service(&CreateServiceInput::default()).await,
            Err(FastlyError::MissingName)
        ));
        assert!(matches!(client.get_service("").await, Err(FastlyError::MissingService)));
        assert!(matches!(client.get_service_details("").await, Err(FastlyError::MissingService)));
        assert!(matches!(
            client.update_service(&UpdateServiceInput::default()).await,
            Err(FastlyError::MissingService)
        ));
        assert!(matches!(client.delete_service("").await, Err(FastlyError::MissingService)));
        assert!(matches!(client.search_service("").await, Err(FastlyError::MissingName)));
    }
}
