//! Resources scoped to a service version
//!
//! Most of the configuration API lives under
//! `/service/{id}/version/{n}/{kind}[/{name}]` and behaves identically: list
//! (sorted by name), create from a form, get, update (which may rename) and
//! delete. The typed operations in the resource modules are thin wrappers
//! over the generic calls here.

use super::client::{self, named_path, versioned_path, Client};
use super::compat::sort_by_name;
use super::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named resource living under a service version
pub trait VersionedResource: DeserializeOwned {
    /// Path segment(s) after `/service/{id}/version/{n}/`
    const KIND: &'static str;

    fn name(&self) -> &str;
}

/// Identifies a service version; input of every `list_*` operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRef {
    pub service_id: String,
    pub version: u32,
}

impl VersionRef {
    pub fn new(service_id: impl Into<String>, version: u32) -> Self {
        Self {
            service_id: service_id.into(),
            version,
        }
    }

    pub fn validate(&self) -> Result<()> {
        client::require_versioned(&self.service_id, self.version)
    }

    /// Refer to a named resource in this version
    pub fn named(&self, name: impl Into<String>) -> NameRef {
        NameRef {
            service_id: self.service_id.clone(),
            version: self.version,
            name: name.into(),
        }
    }
}

/// Identifies a named resource; input of `get_*` and `delete_*`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRef {
    pub service_id: String,
    pub version: u32,
    pub name: String,
}

impl NameRef {
    pub fn new(service_id: impl Into<String>, version: u32, name: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            version,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        client::require_named(&self.service_id, self.version, &self.name)
    }
}

/// Input of `create_*`: identity plus the resource's form fields
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput<F> {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub version: u32,
    pub name: String,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> CreateInput<F> {
    pub fn new(service_id: impl Into<String>, version: u32, name: impl Into<String>, fields: F) -> Self {
        Self {
            service_id: service_id.into(),
            version,
            name: name.into(),
            fields,
        }
    }

    pub fn validate(&self) -> Result<()> {
        client::require_named(&self.service_id, self.version, &self.name)
    }
}

/// Input of `update_*`; `new_name` renames the resource
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInput<F> {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub version: u32,
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> UpdateInput<F> {
    pub fn new(service_id: impl Into<String>, version: u32, name: impl Into<String>, fields: F) -> Self {
        Self {
            service_id: service_id.into(),
            version,
            name: name.into(),
            new_name: None,
            fields,
        }
    }

    pub fn rename(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        client::require_named(&self.service_id, self.version, &self.name)
    }
}

impl Client {
    /// List every resource of kind `R` in a version, sorted by name
    pub async fn list_versioned<R: VersionedResource>(&self, input: &VersionRef) -> Result<Vec<R>> {
        input.validate()?;
        let path = versioned_path(&input.service_id, input.version, R::KIND);
        let mut items: Vec<R> = self.get(&path).await?;
        sort_by_name(&mut items, |r| r.name());
        Ok(items)
    }

    pub async fn create_versioned<R, F>(&self, input: &CreateInput<F>) -> Result<R>
    where
        R: VersionedResource,
        F: Serialize,
    {
        input.validate()?;
        let path = versioned_path(&input.service_id, input.version, R::KIND);
        self.post_form(&path, Some(input)).await
    }

    pub async fn get_versioned<R: VersionedResource>(&self, input: &NameRef) -> Result<R> {
        input.validate()?;
        let path = named_path(&input.service_id, input.version, R::KIND, &input.name);
        self.get(&path).await
    }

    pub async fn update_versioned<R, F>(&self, input: &UpdateInput<F>) -> Result<R>
    where
        R: VersionedResource,
        F: Serialize,
    {
        input.validate()?;
        let path = named_path(&input.service_id, input.version, R::KIND, &input.name);
        self.put_form(&path, Some(input)).await
    }

    pub async fn delete_versioned<R: VersionedResource>(&self, input: &NameRef) -> Result<()> {
        input.validate()?;
        let path = named_path(&input.service_id, input.version, R::KIND, &input.name);
        self.delete_ok(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastly::FastlyError;
    use serde_json::json;

    #[derive(Debug, Default, Serialize)]
    struct Fields {
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    }

    #[test]
    fn test_identity_is_not_form_encoded() {
        let input = CreateInput::new(
            "abc",
            1,
            "origin",
            Fields {
                comment: Some("primary".into()),
            },
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "origin", "comment": "primary" })
        );
    }

    #[test]
    fn test_update_sends_new_name_as_name() {
        let input = UpdateInput::new("abc", 1, "origin", Fields::default()).rename("origin-2");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "origin-2" })
        );

        let input = UpdateInput::new("abc", 1, "origin", Fields::default());
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({}));
    }

    #[test]
    fn test_refs_validate_in_order() {
        assert!(matches!(VersionRef::default().validate(), Err(FastlyError::MissingService)));
        assert!(matches!(
            VersionRef::new("abc", 0).validate(),
            Err(FastlyError::MissingVersion)
        ));
        assert!(matches!(
            VersionRef::new("abc", 3).named("").validate(),
            Err(FastlyError::MissingName)
        ));
        assert_eq!(
            VersionRef::new("abc", 3).named("origin"),
            NameRef::new("abc", 3, "origin")
        );
    }
}
