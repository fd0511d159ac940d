//! Client configuration.
//!
//! Settings are resolved per field in priority order:
//! 1. CLI flag (`--url`, `--token`)
//! 2. Environment variable (`MI_MANAGEMENT_URL`, `MI_ACCESS_TOKEN`)
//! 3. JSON config file (`--config`, `MI_CONFIG`, or `<config dir>/mi/config.json`)
//! 4. Built-in defaults
use crate::cli::GlobalArgs;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://localhost:9164/management/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_ENV: &str = "MI_CONFIG";
pub const URL_ENV: &str = "MI_MANAGEMENT_URL";
pub const TOKEN_ENV: &str = "MI_ACCESS_TOKEN";

/// Connection settings for the management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Resolve the effective config from CLI flags, the process environment and
/// the config file.
pub fn resolve(global: &GlobalArgs) -> Result<ClientConfig> {
    resolve_with_env(global, |key| env::var(key).ok(), default_config_path())
}

/// Resolution with an injectable environment and fallback config path.
pub fn resolve_with_env(
    global: &GlobalArgs,
    lookup: impl Fn(&str) -> Option<String>,
    fallback_path: Option<PathBuf>,
) -> Result<ClientConfig> {
    let explicit_path = global
        .config
        .clone()
        .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from));

    let mut config = match explicit_path {
        Some(path) => load_config(&path)?,
        None => match fallback_path.filter(|path| path.exists()) {
            Some(path) => load_config(&path)?,
            None => ClientConfig::default(),
        },
    };

    if let Some(url) = global.url.clone().or_else(|| lookup(URL_ENV)) {
        config.base_url = url;
    }
    if let Some(token) = global.token.clone().or_else(|| lookup(TOKEN_ENV)) {
        config.token = Some(token);
    }
    config.token = config.token.filter(|token| !token.trim().is_empty());

    validate_config(&config)?;
    config.base_url = normalize_base_url(&config.base_url);
    Ok(config)
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<ClientConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ClientConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// `<config dir>/mi/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mi").join("config.json"))
}

fn validate_config(config: &ClientConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(anyhow!("base_url must be non-empty"));
    }
    if config.timeout_secs == 0 {
        return Err(anyhow!("timeout_secs must be greater than zero"));
    }
    Ok(())
}

/// The URL builder concatenates verbatim, so the base must end in `/`.
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
