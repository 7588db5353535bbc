//! API key resolution.
//!
//! Resolution order:
//! 1. `secrets.toml` in the banter config dir (`OPENAI_API_KEY = "..."`)
//! 2. `OPENAI_API_KEY` environment variable

use std::collections::HashMap;
use std::path::Path;

use banter_common::ConfigError;
use tracing::debug;

use crate::toml_loader::config_dir;

/// Key looked up in both the secrets file and the environment.
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// Resolve the API key from the default secrets store, then the environment.
pub fn resolve_api_key() -> Result<String, ConfigError> {
    let secrets_path = config_dir()?.join("secrets.toml");
    resolve_api_key_from(&secrets_path, std::env::var(API_KEY_NAME).ok())
}

/// Resolve the API key from `secrets_path`, falling back to `env_value`.
///
/// A secrets file that exists but cannot be parsed is an error rather
/// than a silent fallback.
pub fn resolve_api_key_from(
    secrets_path: &Path,
    env_value: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(key) = read_secret(secrets_path, API_KEY_NAME)? {
        debug!("API key resolved from {}", secrets_path.display());
        return Ok(key);
    }

    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        debug!("API key resolved from environment");
        return Ok(key);
    }

    Err(ConfigError::SecretsError(format!(
        "no API key found. Set {API_KEY_NAME} in {} or in the environment.",
        secrets_path.display()
    )))
}

fn read_secret(path: &Path, name: &str) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::SecretsError(format!("failed to read {}: {e}", path.display())))?;
    let table: HashMap<String, toml::Value> = toml::from_str(&content).map_err(|e| {
        ConfigError::SecretsError(format!("failed to parse {}: {e}", path.display()))
    })?;
    Ok(table
        .get(name)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from))
}
