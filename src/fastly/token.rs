//! API tokens

use super::client::{escape, Client};
use super::compat::{opt_timestamp, string_weak, vec_or_null};
use super::error::{FastlyError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// An API token
///
/// `access_token` is only ever populated in the response to [`Client::create_token`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "string_weak")]
    pub id: String,
    #[serde(default, deserialize_with = "string_weak")]
    pub name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub services: Vec<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Input of [`Client::create_token`]
///
/// Tokens are created with the caller's credentials; `username` and `password`
/// are required by the API alongside the key.
#[derive(Debug, Clone, Default)]
pub struct CreateTokenInput {
    pub name: Option<String>,
    pub scope: Option<String>,
    pub username: String,
    pub password: String,
    /// Restrict the token to these services
    pub services: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateTokenInput {
    /// Form pairs; services repeat as `services[]`
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = Vec::new();
        if let Some(name) = &self.name {
            form.push(("name", name.clone()));
        }
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.clone()));
        }
        form.push(("username", self.username.clone()));
        form.push(("password", self.password.clone()));
        for service in &self.services {
            form.push(("services[]", service.clone()));
        }
        if let Some(expires_at) = &self.expires_at {
            form.push(("expires_at", expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        form
    }
}

impl Client {
    /// List tokens belonging to the authenticated user
    pub async fn list_tokens(&self) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = self.get("/tokens").await?;
        tokens.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tokens)
    }

    /// List all tokens of a customer
    pub async fn list_customer_tokens(&self, customer_id: &str) -> Result<Vec<Token>> {
        if customer_id.is_empty() {
            return Err(FastlyError::MissingCustomerId);
        }
        let path = format!("/customer/{}/tokens", escape(customer_id));
        let mut tokens: Vec<Token> = self.get(&path).await?;
        tokens.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tokens)
    }

    /// The token used to authenticate this client
    pub async fn get_token_self(&self) -> Result<Token> {
        self.get("/tokens/self").await
    }

    pub async fn create_token(&self, input: &CreateTokenInput) -> Result<Token> {
        self.post_form("/tokens", Some(&input.form())).await
    }

    /// Revoke a token by id
    pub async fn delete_token(&self, token_id: &str) -> Result<()> {
        if token_id.is_empty() {
            return Err(FastlyError::MissingTokenId);
        }
        self.delete_empty(&format!("/tokens/{}", escape(token_id))).await
    }

    /// Revoke the token used to authenticate this client
    pub async fn delete_token_self(&self) -> Result<()> {
        self.delete_empty("/tokens/self").await
    }

    /// Token revocation answers 204 with no body
    async fn delete_empty(&self, path: &str) -> Result<()> {
        let _: Option<serde_json::Value> = self.delete(path).await?;
        Ok(())
    }
}
