//! Banter configuration system.
//!
//! Provides TOML-based configuration with validation and secrets
//! resolution. All config sections use sensible defaults so partial
//! configs work out of the box.

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::BanterConfig;
pub use secrets::resolve_api_key;

use banter_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<BanterConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
