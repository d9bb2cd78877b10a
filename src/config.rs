//! Configuration file support for intech-storefront.
//!
//! Provides YAML-based configuration through `intech.config.yml` files,
//! environment overrides for the backend connection, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::use_cases::{DEFAULT_ROLES_TABLE, DEFAULT_TOP_PICKS_LIMIT};
use crate::shared::error::StoreError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "intech.config.yml";

/// Overrides `backend_url`
pub const BACKEND_URL_ENV: &str = "INTECH_BACKEND_URL";
/// Overrides `anon_key`
pub const ANON_KEY_ENV: &str = "INTECH_ANON_KEY";

const DEFAULT_BUCKET: &str = "laptops";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub backend_url: Option<String>,
    pub anon_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub bucket: Option<String>,
    pub roles_table: Option<String>,
    pub top_picks_limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Where the storefront's data lives, independent of how it is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub bucket: String,
    pub roles_table: String,
    pub top_picks_limit: usize,
}

/// Connection to the hosted backend
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

// The anon key is public by design but still has no place in debug logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn config_error(message: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    StoreError::Config {
        message: message.into(),
        hint: hint.into(),
    }
    .into()
}

impl ConfigFile {
    /// Resolves the catalog settings, filling in defaults
    ///
    /// # Errors
    /// Returns `StoreError::Config` if a table or bucket name is unusable or
    /// the top picks limit is zero
    pub fn catalog_settings(&self) -> Result<CatalogSettings> {
        let bucket = self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET);
        validate_path_component(bucket, "bucket").map_err(|e| {
            config_error(e.to_string(), "Use a plain bucket name such as 'laptops'")
        })?;

        let roles_table = self.roles_table.as_deref().unwrap_or(DEFAULT_ROLES_TABLE);
        validate_path_component(roles_table, "roles_table").map_err(|e| {
            config_error(e.to_string(), "Use a plain table name such as 'roles'")
        })?;

        let top_picks_limit = self.top_picks_limit.unwrap_or(DEFAULT_TOP_PICKS_LIMIT);
        if top_picks_limit == 0 {
            return Err(config_error(
                "top_picks_limit must be greater than 0",
                "Remove the field to use the default of 5",
            ));
        }

        Ok(CatalogSettings {
            bucket: bucket.to_string(),
            roles_table: roles_table.to_string(),
            top_picks_limit,
        })
    }

    /// Resolves the backend connection; `env` looks up environment overrides
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the URL or key is missing or invalid,
    /// or the timeout is zero
    pub fn backend_config<F>(&self, env: F) -> Result<BackendConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = env(BACKEND_URL_ENV)
            .or_else(|| self.backend_url.clone())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                config_error(
                    "backend_url is not set",
                    format!(
                        "Set backend_url in {} or the {} environment variable",
                        CONFIG_FILENAME, BACKEND_URL_ENV
                    ),
                )
            })?;

        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(config_error(
                format!("backend_url must be an http(s) URL, got '{}'", base_url),
                "Use the project URL shown in the backend dashboard",
            ));
        }

        let anon_key = env(ANON_KEY_ENV)
            .or_else(|| self.anon_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                config_error(
                    "anon_key is not set",
                    format!(
                        "Set anon_key in {} or the {} environment variable",
                        CONFIG_FILENAME, ANON_KEY_ENV
                    ),
                )
            })?;

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(config_error(
                "timeout_secs must be greater than 0",
                "Remove the field to use the default of 10 seconds",
            ));
        }

        Ok(BackendConfig {
            base_url,
            anon_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
