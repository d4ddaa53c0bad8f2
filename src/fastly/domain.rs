//! Domains served by a service version

use super::client::Client;
use super::compat::{opt_timestamp, string_weak, u32_weak};
use super::error::Result;
use super::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for Domain {
    const KIND: &'static str = "domain";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

pub type ListDomainsInput = VersionRef;
pub type CreateDomainInput = CreateInput<DomainFields>;
pub type GetDomainInput = NameRef;
pub type UpdateDomainInput = UpdateInput<DomainFields>;
pub type DeleteDomainInput = NameRef;

impl Client {
    pub async fn list_domains(&self, input: &ListDomainsInput) -> Result<Vec<Domain>> {
        self.list_versioned(input).await
    }

    pub async fn create_domain(&self, input: &CreateDomainInput) -> Result<Domain> {
        self.create_versioned(input).await
    }

    pub async fn get_domain(&self, input: &GetDomainInput) -> Result<Domain> {
        self.get_versioned(input).await
    }

    pub async fn update_domain(&self, input: &UpdateDomainInput) -> Result<Domain> {
        self.update_versioned(input).await
    }

    pub async fn delete_domain(&self, input: &DeleteDomainInput) -> Result<()> {
        self.delete_versioned::<Domain>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_domain() {
        let domain: Domain = serde_json::from_value(json!({
            "service_id": "abc",
            "version": "1",
            "name": "www.example.com",
            "comment": "",
            "updated_at": "2021-06-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(Domain::KIND, "domain");
        assert_eq!(domain.version, 1);
        assert_eq!(domain.comment.as_deref(), Some(""));
        assert!(domain.updated_at.is_some());
    }

    #[test]
    fn test_create_form() {
        let input = CreateDomainInput::new(
            "abc",
            1,
            "www.example.com",
            DomainFields {
                comment: Some("primary".into()),
            },
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "www.example.com", "comment": "primary" })
        );
    }
}
