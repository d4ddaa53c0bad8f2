//! Account users

use super::client::{escape, Client};
use super::compat::{opt_bool, opt_timestamp, string_weak};
use super::error::{FastlyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "string_weak")]
    pub id: String,
    #[serde(default, deserialize_with = "string_weak")]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub email_hash: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub limit_services: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub locked: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub require_new_password: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub two_factor_auth_enabled: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub two_factor_setup_required: Option<bool>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Name used for sorting and display; falls back to the login
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserInput {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserInput {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

fn require_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(FastlyError::MissingId);
    }
    Ok(())
}

fn require_login(login: &str) -> Result<()> {
    if login.is_empty() {
        return Err(FastlyError::MissingLogin);
    }
    Ok(())
}

impl Client {
    /// List the users of a customer, sorted by name
    pub async fn list_customer_users(&self, customer_id: &str) -> Result<Vec<User>> {
        if customer_id.is_empty() {
            return Err(FastlyError::MissingCustomerId);
        }
        let path = format!("/customer/{}/users", escape(customer_id));
        let mut users: Vec<User> = self.get(&path).await?;
        users.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        Ok(users)
    }

    /// The user owning the API key
    pub async fn get_current_user(&self) -> Result<User> {
        self.get("/current_user").await
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        require_id(id)?;
        self.get(&format!("/user/{}", escape(id))).await
    }

    pub async fn create_user(&self, input: &CreateUserInput) -> Result<User> {
        require_login(&input.login)?;
        self.post_form("/user", Some(input)).await
    }

    pub async fn update_user(&self, input: &UpdateUserInput) -> Result<User> {
        require_id(&input.id)?;
        self.put_form(&format!("/user/{}", escape(&input.id)), Some(input))
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete_ok(&format!("/user/{}", escape(id))).await
    }

    /// Send a password reset e-mail to a login
    pub async fn reset_user_password(&self, login: &str) -> Result<()> {
        require_login(login)?;
        self.post_ok(&format!("/user/{}/password/request_reset", escape(login)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastly::ApiKey;
    use serde_json::json;

    #[test]
    fn test_decode_user() {
        let user: User = serde_json::from_value(json!({
            "id": "x9KzsrACXZv8tPwlEDsKb6",
            "login": "jane@example.com",
            "name": "Jane",
            "role": "engineer",
            "locked": false,
            "require_new_password": "0",
            "two_factor_auth_enabled": 1
        }))
        .unwrap();

        assert_eq!(user.display_name(), "Jane");
        assert_eq!(user.locked, Some(false));
        assert_eq!(user.require_new_password, Some(false));
        assert_eq!(user.two_factor_auth_enabled, Some(true));
    }

    #[tokio::test]
    async fn test_user_operations_require_identifiers() {
        let client = Client::with_endpoint(ApiKey::new("k"), "http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.list_customer_users("").await,
            Err(FastlyError::MissingCustomerId)
        ));
        assert!(matches!(client.get_user("").await, Err(FastlyError::MissingId)));
        assert!(matches!(
            client.create_user(&CreateUserInput::default()).await,
            Err(FastlyError::MissingLogin)
        ));
        assert!(matches!(
            client.update_user(&UpdateUserInput::default()).await,
            Err(FastlyError::MissingId)
        ));
        assert!(matches!(client.delete_user("").await, Err(FastlyError::MissingId)));
        assert!(matches!(client.reset_user_password("").await, Err(FastlyError::MissingLogin)));
    }
}
