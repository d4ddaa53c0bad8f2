//! Conditions
//!
//! VCL expressions that gate when other objects (headers, backends, logging)
//! apply.

use super::client::Client;
use super::compat::{opt_non_empty, opt_timestamp, opt_u32, string_weak, u32_weak};
use super::error::Result;
use super::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stage of the request a condition is evaluated in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionType {
    Request,
    Cache,
    Response,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub statement: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "opt_non_empty")]
    pub condition_type: Option<ConditionType>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub priority: Option<u32>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for Condition {
    const KIND: &'static str = "condition";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConditionFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

pub type ListConditionsInput = VersionRef;
pub type CreateConditionInput = CreateInput<ConditionFields>;
pub type GetConditionInput = NameRef;
pub type UpdateConditionInput = UpdateInput<ConditionFields>;
pub type DeleteConditionInput = NameRef;

impl Client {
    pub async fn list_conditions(&self, input: &ListConditionsInput) -> Result<Vec<Condition>> {
        self.list_versioned(input).await
    }

    pub async fn create_condition(&self, input: &CreateConditionInput) -> Result<Condition> {
        self.create_versioned(input).await
    }

    pub async fn get_condition(&self, input: &GetConditionInput) -> Result<Condition> {
        self.get_versioned(input).await
    }

    pub async fn update_condition(&self, input: &UpdateConditionInput) -> Result<Condition> {
        self.update_versioned(input).await
    }

    pub async fn delete_condition(&self, input: &DeleteConditionInput) -> Result<()> {
        self.delete_versioned::<Condition>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_type_wire_format() {
        let fields = ConditionFields {
            statement: Some("req.url ~ \"^/api\"".into()),
            condition_type: Some(ConditionType::Request),
            priority: Some(10),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "statement": "req.url ~ \"^/api\"", "type": "REQUEST", "priority": 10 })
        );

        let condition: Condition =
            serde_json::from_value(json!({ "name": "api", "type": "CACHE", "priority": "5" })).unwrap();
        assert_eq!(condition.condition_type, Some(ConditionType::Cache));
        assert_eq!(condition.priority, Some(5));
    }

    #[test]
    fn test_unknown_and_empty_types_decode() {
        let condition: Condition =
            serde_json::from_value(json!({ "name": "pre", "type": "PREFETCH" })).unwrap();
        assert_eq!(
            condition.condition_type,
            Some(ConditionType::Other("PREFETCH".into()))
        );

        let condition: Condition = serde_json::from_value(json!({ "name": "x", "type": "" })).unwrap();
        assert_eq!(condition.condition_type, None);
    }
}
