//! Service versions
//!
//! Every configuration change happens on a version. Versions are created,
//! cloned, validated, activated and locked here.

use super::client::{require_service, require_versioned, service_path, version_path, Client};
use super::compat::{bool_weak, opt_timestamp, string_weak, u32_weak, vec_or_null};
use super::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, deserialize_with = "u32_weak")]
    pub number: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "bool_weak")]
    pub active: bool,
    #[serde(default, deserialize_with = "bool_weak")]
    pub locked: bool,
    #[serde(default, deserialize_with = "bool_weak")]
    pub deployed: bool,
    #[serde(default, deserialize_with = "bool_weak")]
    pub staging: bool,
    #[serde(default, deserialize_with = "bool_weak")]
    pub testing: bool,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Form fields shared by version create and update
#[derive(Debug, Clone, Default, Serialize)]
struct VersionForm<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

/// Result of validating a version's configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VersionValidation {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub warnings: Vec<String>,
}

impl VersionValidation {
    pub fn is_valid(&self) -> bool {
        self.status == "ok"
    }
}

impl Client {
    /// List all versions of a service, ascending by number
    pub async fn list_versions(&self, service_id: &str) -> Result<Vec<Version>> {
        require_service(service_id)?;
        let path = format!("{}/version", service_path(service_id));
        let mut versions: Vec<Version> = self.get(&path).await?;
        versions.sort_by_key(|v| v.number);
        Ok(versions)
    }

    /// Highest numbered version of a service, if any
    pub async fn latest_version(&self, service_id: &str) -> Result<Option<Version>> {
        let versions = self.list_versions(service_id).await?;
        Ok(versions.into_iter().max_by_key(|v| v.number))
    }

    pub async fn create_version(&self, service_id: &str, comment: Option<&str>) -> Result<Version> {
        require_service(service_id)?;
        let path = format!("{}/version", service_path(service_id));
        self.post_form(&path, Some(&VersionForm { comment })).await
    }

    pub async fn get_version(&self, service_id: &str, version: u32) -> Result<Version> {
        require_versioned(service_id, version)?;
        self.get(&version_path(service_id, version)).await
    }

    pub async fn update_version(
        &self,
        service_id: &str,
        version: u32,
        comment: Option<&str>,
    ) -> Result<Version> {
        require_versioned(service_id, version)?;
        self.put_form(&version_path(service_id, version), Some(&VersionForm { comment }))
            .await
    }

    /// Activate a version; the previously active one is deactivated
    pub async fn activate_version(&self, service_id: &str, version: u32) -> Result<Version> {
        self.version_action(service_id, version, "activate").await
    }

    pub async fn deactivate_version(&self, service_id: &str, version: u32) -> Result<Version> {
        self.version_action(service_id, version, "deactivate").await
    }

    /// Copy a version into a new, editable version
    pub async fn clone_version(&self, service_id: &str, version: u32) -> Result<Version> {
        self.version_action(service_id, version, "clone").await
    }

    pub async fn lock_version(&self, service_id: &str, version: u32) -> Result<Version> {
        self.version_action(service_id, version, "lock").await
    }

    /// Check a version's configuration without activating it
    pub async fn validate_version(&self, service_id: &str, version: u32) -> Result<VersionValidation> {
        require_versioned(service_id, version)?;
        let path = format!("{}/validate", version_path(service_id, version));
        self.get(&path).await
    }

    async fn version_action(&self, service_id: &str, version: u32, action: &str) -> Result<Version> {
        require_versioned(service_id, version)?;
        tracing::info!("{} version {} of service {}", action, version, service_id);
        let path = format!("{}/{}", version_path(service_id, version), action);
        self.put_form::<_, [(&str, &str)]>(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastly::{ApiKey, FastlyError};
    use serde_json::json;

    fn client() -> Client {
        Client::with_endpoint(ApiKey::new("test-key"), "http://127.0.0.1:9").unwrap()
    }

    #[test]
    fn test_decode_version() {
        let version: Version = serde_json::from_value(json!({
            "number": 3,
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "comment": "",
            "active": true,
            "locked": "1",
            "deployed": null,
            "staging": false,
            "testing": 0,
            "created_at": "2016-06-08T17:00:01Z",
            "updated_at": "2016-06-08T17:10:12Z",
            "deleted_at": null
        }))
        .unwrap();

        assert_eq!(version.number, 3);
        assert!(version.active);
        assert!(version.locked);
        assert!(!version.deployed);
        assert!(version.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_version_operations_require_identifiers() {
        let client = client();
        assert!(matches!(client.list_versions("").await, Err(FastlyError::MissingService)));
        assert!(matches!(client.create_version("", None).await, Err(FastlyError::MissingService)));
        assert!(matches!(client.get_version("", 0).await, Err(FastlyError::MissingService)));
        assert!(matches!(client.get_version("abc", 0).await, Err(FastlyError::MissingVersion)));
        assert!(matches!(
            client.update_version("abc", 0, Some("x")).await,
            Err(FastlyError::MissingVersion)
        ));
        assert!(matches!(client.activate_version("abc", 0).await, Err(FastlyError::MissingVersion)));
        assert!(matches!(client.clone_version("", 1).await, Err(FastlyError::MissingService)));
        assert!(matches!(client.validate_version("abc", 0).await, Err(FastlyError::MissingVersion)));
    }
}
