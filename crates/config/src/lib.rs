//! `adjutant-config` — assistant runtime configuration.
//!
//! Provides:
//! - Typed config schema (logging, weather endpoints, app table, aliases)
//! - YAML loading with `${ENV_VAR}` substitution
//! - Default value application

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;

pub use defaults::{apply_all_defaults, default_apps};
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config};
pub use schema::{AssistantConfig, LoggingConfig, WeatherConfig};

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load a config file, substitute env vars, and apply defaults.
///
/// This is the main entry point for preparing a config at startup. A missing
/// file is not an error — it yields the pure defaults.
pub async fn load_and_prepare(path: &Path) -> Result<AssistantConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(apply_all_defaults(AssistantConfig::default()));
    }

    let raw_config = load_config(path).await?;

    let value: Value = serde_json::to_value(&raw_config)
        .context("Failed to serialize config for processing")?;
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    let config: AssistantConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    Ok(apply_all_defaults(config))
}
