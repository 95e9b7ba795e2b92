//! Typed configuration schema.
//!
//! All sections are optional in the file; `apply_all_defaults` fills in
//! whatever was left unset.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherConfig>,

    /// App-name → launch command table for the `open` command. Entries are
    /// merged over the platform defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<HashMap<String, String>>,

    /// Extra natural-language alias phrases, registered after the built-in
    /// table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset (e.g. "info").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for the rolling NDJSON log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoding_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_url: Option<String>,

    /// "fahrenheit" or "celsius".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<String>,

    /// "mph", "kmh", "ms", or "kn".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windspeed_unit: Option<String>,
}
