//! BigQuery logging endpoints
//!
//! Stream log lines into a Google BigQuery table.

use crate::fastly::client::Client;
use crate::fastly::compat::{opt_timestamp, opt_u32, string_weak, u32_weak};
use crate::fastly::error::Result;
use crate::fastly::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A BigQuery logging endpoint
///
/// `secret_key` is the service account private key; `template_suffix` names
/// the template table used for per-day tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BigQuery {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub template_suffix: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
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

impl VersionedResource for BigQuery {
    const KIND: &'static str = "logging/bigquery";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BigQueryFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

pub type ListBigQueriesInput = VersionRef;
pub type CreateBigQueryInput = CreateInput<BigQueryFields>;
pub type GetBigQueryInput = NameRef;
pub type UpdateBigQueryInput = UpdateInput<BigQueryFields>;
pub type DeleteBigQueryInput = NameRef;

impl Client {
    pub async fn list_bigqueries(&self, input: &ListBigQueriesInput) -> Result<Vec<BigQuery>> {
        self.list_versioned(input).await
    }

    pub async fn create_bigquery(&self, input: &CreateBigQueryInput) -> Result<BigQuery> {
        self.create_versioned(input).await
    }

    pub async fn get_bigquery(&self, input: &GetBigQueryInput) -> Result<BigQuery> {
        self.get_versioned(input).await
    }

    pub async fn update_bigquery(&self, input: &UpdateBigQueryInput) -> Result<BigQuery> {
        self.update_versioned(input).await
    }

    pub async fn delete_bigquery(&self, input: &DeleteBigQueryInput) -> Result<()> {
        self.delete_versioned::<BigQuery>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_bigquery() {
        let bq: BigQuery = serde_json::from_value(json!({
            "service_id": "abc",
            "version": "4",
            "name": "warehouse",
            "project_id": "analytics-prod",
            "dataset": "cdn",
            "table": "requests",
            "template_suffix": null,
            "format_version": "2",
            "created_at": "2020-01-01T00:00:00Z",
            "deleted_at": ""
        }))
        .unwrap();

        assert_eq!(BigQuery::KIND, "logging/bigquery");
        assert_eq!(bq.version, 4);
        assert_eq!(bq.dataset.as_deref(), Some("cdn"));
        assert_eq!(bq.format_version, Some(2));
        assert!(bq.template_suffix.is_none());
        assert!(bq.created_at.is_some());
        assert!(bq.deleted_at.is_none());
    }

    #[test]
    fn test_create_form_skips_unset_fields() {
        let input = CreateBigQueryInput::new(
            "abc",
            4,
            "warehouse",
            BigQueryFields {
                project_id: Some("analytics-prod".into()),
                table: Some("requests".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "warehouse", "project_id": "analytics-prod", "table": "requests" })
        );
    }
}
