//! Configuration Management
//!
//! Handles persistent configuration storage for fastly-mgmt.

use crate::fastly::auth::{self, ApiKey, DEFAULT_ENDPOINT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API token; prefer FASTLY_API_KEY over storing it here
    #[serde(default)]
    pub api_key: Option<String>,
    /// API endpoint override
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Last used service ID
    #[serde(default)]
    pub service_id: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fastly-mgmt").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file; missing or broken files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective API key (CLI > config > FASTLY_API_KEY)
    ///
    /// A malformed key given on the command line is an error; a malformed key
    /// in the config file is skipped with a warning.
    pub fn effective_api_key(&self, cli: Option<&str>) -> Result<Option<ApiKey>> {
        if let Some(key) = cli {
            let key = ApiKey::new(key.trim());
            if !key.is_valid() {
                anyhow::bail!("The API key given with --api-key is malformed");
            }
            return Ok(Some(key));
        }

        if let Some(key) = &self.api_key {
            let key = ApiKey::new(key.trim());
            if key.is_valid() {
                return Ok(Some(key));
            }
            tracing::warn!("Ignoring malformed API key in config file");
        }

        Ok(auth::get_default_api_key())
    }

    /// Get effective endpoint (CLI > config > FASTLY_API_URL > default)
    pub fn effective_endpoint(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.endpoint.clone())
            .or_else(auth::get_default_endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Get effective service (CLI > config)
    pub fn effective_service(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string).or_else(|| self.service_id.clone())
    }

    /// Set service and save
    pub fn set_service(&mut self, service_id: &str) -> Result<()> {
        self.service_id = Some(service_id.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_win() {
        let config = Config {
            api_key: Some("from-config".into()),
            endpoint: Some("https://config.example.com".into()),
            service_id: Some("svc-config".into()),
        };

        assert_eq!(
            config.effective_api_key(Some("from-cli")).unwrap().unwrap().as_str(),
            "from-cli"
        );
        assert_eq!(
            config.effective_api_key(None).unwrap().unwrap().as_str(),
            "from-config"
        );
        assert_eq!(
            config.effective_endpoint(Some("https://cli.example.com")),
            "https://cli.example.com"
        );
        assert_eq!(config.effective_endpoint(None), "https://config.example.com");
        assert_eq!(config.effective_service(None).as_deref(), Some("svc-config"));
        assert_eq!(config.effective_service(Some("svc-cli")).as_deref(), Some("svc-cli"));
    }

    #[test]
    fn test_malformed_cli_key_is_an_error() {
        let config = Config {
            api_key: Some("from-config".into()),
            ..Default::default()
        };

        let err = config.effective_api_key(Some("bad key\n")).unwrap_err();
        assert!(err.to_string().contains("--api-key"));
        assert!(config.effective_api_key(Some("")).is_err());
    }

    #[test]
    fn test_malformed_config_key_is_skipped() {
        let config = Config {
            api_key: Some("not a key".into()),
            ..Default::default()
        };

        // Falls through to FASTLY_API_KEY, never to the malformed value
        let key = config.effective_api_key(None).unwrap();
        assert!(key.map(|k| k.as_str() != "not a key").unwrap_or(true));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("fastly-mgmt-test-{}", std::process::id()));
        let path = dir.join("config.json");

        let config = Config {
            service_id: Some("SU1Z0isxPaozGVKXdv0eY".into()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.service_id.as_deref(), Some("SU1Z0isxPaozGVKXdv0eY"));
        assert!(loaded.api_key.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("fastly-mgmt-broken-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let loaded = Config::load_from(&path);
        assert!(loaded.service_id.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
