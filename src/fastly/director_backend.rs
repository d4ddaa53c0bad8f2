//! Director to backend links

use super::client::{escape, require_versioned, versioned_path, Client};
use super::compat::{opt_timestamp, string_weak, u32_weak};
use super::error::{FastlyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership of a backend in a director
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorBackend {
    #[serde(default, deserialize_with = "string_weak")]
    pub service_id: String,
    #[serde(default, deserialize_with = "u32_weak")]
    pub version: u32,
    #[serde(default, rename = "director_name", deserialize_with = "string_weak")]
    pub director: String,
    #[serde(default, rename = "backend_name", deserialize_with = "string_weak")]
    pub backend: String,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input of every director-backend operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorBackendInput {
    pub service_id: String,
    pub version: u32,
    pub director: String,
    pub backend: String,
}

impl DirectorBackendInput {
    pub fn new(
        service_id: impl Into<String>,
        version: u32,
        director: impl Into<String>,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            version,
            director: director.into(),
            backend: backend.into(),
        }
    }

    /// Service, version, director, then backend
    pub fn validate(&self) -> Result<()> {
        require_versioned(&self.service_id, self.version)?;
        if self.director.is_empty() {
            return Err(FastlyError::MissingDirector);
        }
        if self.backend.is_empty() {
            return Err(FastlyError::MissingBackend);
        }
        Ok(())
    }

    fn path(&self) -> String {
        format!(
            "{}/{}/backend/{}",
            versioned_path(&self.service_id, self.version, "director"),
            escape(&self.director),
            escape(&self.backend)
        )
    }
}

pub type CreateDirectorBackendInput = DirectorBackendInput;
pub type GetDirectorBackendInput = DirectorBackendInput;
pub type DeleteDirectorBackendInput = DirectorBackendInput;

impl Client {
    /// Attach a backend to a director
    pub async fn create_director_backend(
        &self,
        input: &CreateDirectorBackendInput,
    ) -> Result<DirectorBackend> {
        input.validate()?;
        self.post_form::<_, [(&str, &str)]>(&input.path(), None).await
    }

    pub async fn get_director_backend(
        &self,
        input: &GetDirectorBackendInput,
    ) -> Result<DirectorBackend> {
        input.validate()?;
        self.get(&input.path()).await
    }

    /// Detach a backend from a director
    pub async fn delete_director_backend(&self, input: &DeleteDirectorBackendInput) -> Result<()> {
        input.validate()?;
        self.delete_ok(&input.path()).await
    }
}
