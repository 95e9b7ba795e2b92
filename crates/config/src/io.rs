//! Config file location and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::schema::AssistantConfig;

/// Directory holding the assistant's config and state.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".adjutant")
}

/// Default config file path (`~/.adjutant/config.yaml`).
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Read and parse a config file.
pub async fn load_config(path: &Path) -> Result<AssistantConfig> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AssistantConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
