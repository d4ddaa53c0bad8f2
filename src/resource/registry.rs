//! Resource Registry - Load resource kind definitions from JSON
//!
//! This module loads the resource kinds the command line knows about from
//! embedded JSON files and provides lookup functions for the rest of the
//! application.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[
    include_str!("../resources/account.json"),
    include_str!("../resources/config.json"),
    include_str!("../resources/logging.json"),
];

/// What a resource kind is addressed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Global to the account (services, tokens)
    Account,
    /// Needs a customer id (users)
    Customer,
    /// Needs a service id (versions)
    Service,
    /// Needs a service id and a version number
    Versioned,
}

/// Column definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDef {
    pub header: String,
    pub json_path: String,
    pub width: u16,
}

/// Action a kind supports on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    List,
    Get,
    Delete,
}

/// Resource kind definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub display_name: String,
    pub scope: Scope,
    /// Field that identifies a single item for `get` and `delete`
    #[serde(default = "default_name_field")]
    pub name_field: String,
    #[serde(default)]
    pub actions: Vec<Action>,
    pub columns: Vec<ColumnDef>,
}

fn default_name_field() -> String {
    "name".to_string()
}

impl ResourceDef {
    pub fn supports(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Label for one item, e.g. `id SU1Z0isxPaozGVKXdv0eY`
    pub fn item_label(&self, value: &str) -> String {
        format!("{} {}", self.name_field, value)
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub resources: HashMap<String, ResourceDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<ResourceConfig> = OnceLock::new();

/// Get the resource registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static ResourceConfig {
    REGISTRY.get_or_init(|| {
        let mut final_config = ResourceConfig {
            resources: HashMap::new(),
        };

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));
            final_config.resources.extend(partial.resources);
        }

        final_config
    })
}

/// Get a resource definition by key
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_registry().resources.get(key)
}

/// Get all resource keys, sorted (for help output)
pub fn get_all_resource_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = get_registry()
        .resources
        .keys()
        .map(|s| s.as_str())
        .collect();
    keys.sort_unstable();
    keys
}

/// Keys of every kind scoped to a service version
pub fn versioned_resource_keys() -> Vec<&'static str> {
    get_all_resource_keys()
        .into_iter()
        .filter(|k| get_resource(k).map(|d| d.scope == Scope::Versioned).unwrap_or(false))
        .collect()
}
