//! Dispatch
//!
//! Maps resource kind keys from the registry to typed client calls and turns
//! the results into JSON values for rendering.

use super::registry::{get_resource, Action, ResourceDef};
use crate::fastly::backend::Backend;
use crate::fastly::condition::Condition;
use crate::fastly::director::Director;
use crate::fastly::domain::Domain;
use crate::fastly::health_check::HealthCheck;
use crate::fastly::logging::{
    BigQuery, Cloudfiles, Ftp, Gcs, Logentries, Loggly, Papertrail, Splunk, Sumologic, Syslog, S3,
};
use crate::fastly::{Client, VersionRef};
use anyhow::{Context as _, Result};
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

/// Identifiers the command line was given
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub service_id: Option<String>,
    pub version: Option<u32>,
    pub customer_id: Option<String>,
}

impl Context {
    /// Missing parts become empty so the client reports which one is missing
    pub fn version_ref(&self) -> VersionRef {
        VersionRef::new(self.service(), self.version.unwrap_or(0))
    }

    pub fn service(&self) -> &str {
        self.service_id.as_deref().unwrap_or("")
    }
}

/// Run `$body` with `$R` bound to the resource type behind a versioned kind key
macro_rules! versioned_kind {
    ($kind:expr, $R:ident => $body:expr) => {
        match $kind {
            "backends" => { type $R = Backend; Some($body) }
            "directors" => { type $R = Director; Some($body) }
            "healthchecks" => { type $R = HealthCheck; Some($body) }
            "domains" => { type $R = Domain; Some($body) }
            "conditions" => { type $R = Condition; Some($body) }
            "logging-bigquery" => { type $R = BigQuery; Some($body) }
            "logging-cloudfiles" => { type $R = Cloudfiles; Some($body) }
            "logging-ftp" => { type $R = Ftp; Some($body) }
            "logging-gcs" => { type $R = Gcs; Some($body) }
            "logging-logentries" => { type $R = Logentries; Some($body) }
            "logging-loggly" => { type $R = Loggly; Some($body) }
            "logging-papertrail" => { type $R = Papertrail; Some($body) }
            "logging-s3" => { type $R = S3; Some($body) }
            "logging-splunk" => { type $R = Splunk; Some($body) }
            "logging-sumologic" => { type $R = Sumologic; Some($body) }
            "logging-syslog" => { type $R = Syslog; Some($body) }
            _ => None,
        }
    };
}

fn lookup(kind: &str, action: Action) -> Result<&'static ResourceDef> {
    let Some(def) = get_resource(kind) else {
        return Err(anyhow::anyhow!("Unknown resource: {}", kind));
    };
    if !def.supports(action) {
        return Err(anyhow::anyhow!(
            "{} does not support {:?}",
            def.display_name,
            action
        ));
    }
    Ok(def)
}

fn to_value<T: Serialize>(item: T) -> Result<Value> {
    serde_json::to_value(item).context("Failed to serialize resource")
}

fn to_values<T: Serialize>(items: Vec<T>) -> Result<Vec<Value>> {
    items.into_iter().map(to_value).collect()
}

/// Customer id from the context, or the current user's customer
async fn resolve_customer(client: &Client, ctx: &Context) -> Result<String> {
    if let Some(customer_id) = &ctx.customer_id {
        return Ok(customer_id.clone());
    }
    let user = client.get_current_user().await?;
    user.customer_id
        .filter(|c| !c.is_empty())
        .context("Current user has no customer id")
}

/// List every item of a kind
pub async fn list(kind: &str, client: &Client, ctx: &Context) -> Result<Vec<Value>> {
    lookup(kind, Action::List)?;
    tracing::debug!("list: kind={}", kind);

    let vref = ctx.version_ref();
    let listed = versioned_kind!(kind, R => client
        .list_versioned::<R>(&vref)
        .await
        .map_err(anyhow::Error::from)
        .and_then(to_values));
    if let Some(result) = listed {
        return result;
    }

    match kind {
        "services" => to_values(client.list_services().await?),
        "versions" => to_values(client.list_versions(ctx.service()).await?),
        "tokens" => to_values(client.list_tokens().await?),
        "users" => {
            let customer_id = resolve_customer(client, ctx).await?;
            to_values(client.list_customer_users(&customer_id).await?)
        }
        _ => Err(anyhow::anyhow!("No list operation for {}", kind)),
    }
}

/// Fetch a single item by its name (or id / number, per kind)
pub async fn get(kind: &str, client: &Client, ctx: &Context, name: &str) -> Result<Value> {
    let def = lookup(kind, Action::Get)?;
    tracing::debug!("get: kind={}, {}", kind, def.item_label(name));

    let nref = ctx.version_ref().named(name);
    let fetched = versioned_kind!(kind, R => client
        .get_versioned::<R>(&nref)
        .await
        .map_err(anyhow::Error::from)
        .and_then(to_value));
    if let Some(result) = fetched {
        return result;
    }

    match kind {
        "services" => to_value(client.get_service(name).await?),
        "versions" => {
            let number: u32 = name
                .parse()
                .with_context(|| format!("Invalid version number: {}", name))?;
            to_value(client.get_version(ctx.service(), number).await?)
        }
        "tokens" if name == "self" => to_value(client.get_token_self().await?),
        "tokens" => Err(anyhow::anyhow!("Only the current token can be fetched; use 'self'")),
        "users" if name == "current" => to_value(client.get_current_user().await?),
        "users" => to_value(client.get_user(name).await?),
        _ => Err(anyhow::anyhow!("No get operation for {}", kind)),
    }
}

/// Delete a single item
pub async fn delete(kind: &str, client: &Client, ctx: &Context, name: &str) -> Result<()> {
    let def = lookup(kind, Action::Delete)?;
    tracing::info!("delete: kind={}, {}", kind, def.item_label(name));

    let nref = ctx.version_ref().named(name);
    if let Some(result) = versioned_kind!(kind, R => client.delete_versioned::<R>(&nref).await) {
        return Ok(result?);
    }

    match kind {
        "services" => Ok(client.delete_service(name).await?),
        "tokens" if name == "self" => Ok(client.delete_token_self().await?),
        "tokens" => Ok(client.delete_token(name).await?),
        "users" => Ok(client.delete_user(name).await?),
        _ => Err(anyhow::anyhow!("No delete operation for {}", kind)),
    }
}

/// List several versioned kinds of one version concurrently
///
/// Failures are reported per kind so one bad endpoint does not hide the rest.
pub async fn summary(
    client: &Client,
    ctx: &Context,
    kinds: &[&'static str],
) -> Vec<(&'static str, Result<Vec<Value>>)> {
    let fetches = kinds.iter().map(|kind| async move { (*kind, list(kind, client, ctx).await) });
    join_all(fetches).await
}
