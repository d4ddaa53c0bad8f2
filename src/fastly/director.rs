//! Directors
//!
//! Load balancing groups of backends.

use super::client::Client;
use super::compat::{opt_non_empty, opt_timestamp, opt_u32, string_weak, u32_weak, vec_or_null};
use super::error::Result;
use super::versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

/// How a director picks a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectorType {
    Random,
    Hash,
    Client,
    /// A code this client does not know by name
    Other(u32),
}

impl DirectorType {
    /// Numeric code used on the wire
    pub fn code(self) -> u32 {
        match self {
            DirectorType::Random => 1,
            DirectorType::Hash => 3,
            DirectorType::Client => 4,
            DirectorType::Other(code) => code,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            1 => DirectorType::Random,
            3 => DirectorType::Hash,
            4 => DirectorType::Client,
            other => DirectorType::Other(other),
        }
    }
}

impl Serialize for DirectorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for DirectorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        super::compat::u32_weak(deserializer).map(DirectorType::from_code)
    }
}

/// A director of a service version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub shield: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub quorum: Option<u32>,
    #[serde(default, rename = "type", deserialize_with = "opt_non_empty")]
    pub director_type: Option<DirectorType>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub retries: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub capacity: Option<u32>,
    /// Names of the backends attached to this director
    #[serde(default, deserialize_with = "vec_or_null")]
    pub backends: Vec<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VersionedResource for Director {
    const KIND: &'static str = "director";

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectorFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quorum: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub director_type: Option<DirectorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
}

pub type ListDirectorsInput = VersionRef;
pub type CreateDirectorInput = CreateInput<DirectorFields>;
pub type GetDirectorInput = NameRef;
pub type UpdateDirectorInput = UpdateInput<DirectorFields>;
pub type DeleteDirectorInput = NameRef;

impl Client {
    pub async fn list_directors(&self, input: &ListDirectorsInput) -> Result<Vec<Director>> {
        self.list_versioned(input).await
    }

    pub async fn create_director(&self, input: &CreateDirectorInput) -> Result<Director> {
        self.create_versioned(input).await
    }

    pub async fn get_director(&self, input: &GetDirectorInput) -> Result<Director> {
        self.get_versioned(input).await
    }

    pub async fn update_director(&self, input: &UpdateDirectorInput) -> Result<Director> {
        self.update_versioned(input).await
    }

    pub async fn delete_director(&self, input: &DeleteDirectorInput) -> Result<()> {
        self.delete_versioned::<Director>(input).await
    }
}
