//! Default value application.

use std::collections::HashMap;

use crate::schema::{AssistantConfig, LoggingConfig, WeatherConfig};

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "logs";

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TEMPERATURE_UNIT: &str = "fahrenheit";
pub const DEFAULT_WINDSPEED_UNIT: &str = "mph";

/// Platform default app table for the `open` command. Values are full
/// launch command lines; the first token is the program.
pub fn default_apps() -> HashMap<String, String> {
    let entries: &[(&str, &str)] = if cfg!(target_os = "windows") {
        &[
            ("notepad", "notepad.exe"),
            ("calc", "calc.exe"),
            ("calculator", "calc.exe"),
            ("edge", "msedge.exe"),
            ("chrome", "chrome.exe"),
            ("explorer", "explorer.exe"),
            ("cmd", "cmd.exe"),
            ("powershell", "powershell.exe"),
            ("word", "winword.exe"),
            ("excel", "excel.exe"),
        ]
    } else if cfg!(target_os = "macos") {
        &[
            ("calculator", "open -a Calculator"),
            ("notes", "open -a Notes"),
            ("finder", "open -a Finder"),
            ("browser", "open -a Safari"),
            ("terminal", "open -a Terminal"),
        ]
    } else {
        &[
            ("calculator", "gnome-calculator"),
            ("files", "nautilus"),
            ("editor", "gedit"),
            ("browser", "xdg-open https://www.google.com"),
        ]
    };

    entries
        .iter()
        .map(|(name, program)| (name.to_string(), program.to_string()))
        .collect()
}

/// Fill every unset section with its default. User-provided app entries are
/// merged over the platform table.
pub fn apply_all_defaults(config: AssistantConfig) -> AssistantConfig {
    let logging = config.logging.unwrap_or_default();
    let weather = config.weather.unwrap_or_default();

    let mut apps = default_apps();
    if let Some(user_apps) = config.apps {
        apps.extend(user_apps);
    }

    AssistantConfig {
        logging: Some(LoggingConfig {
            level: logging.level.or_else(|| Some(DEFAULT_LOG_LEVEL.into())),
            dir: logging.dir.or_else(|| Some(DEFAULT_LOG_DIR.into())),
        }),
        weather: Some(WeatherConfig {
            geocoding_url: weather
                .geocoding_url
                .or_else(|| Some(DEFAULT_GEOCODING_URL.into())),
            forecast_url: weather
                .forecast_url
                .or_else(|| Some(DEFAULT_FORECAST_URL.into())),
            temperature_unit: weather
                .temperature_unit
                .or_else(|| Some(DEFAULT_TEMPERATURE_UNIT.into())),
            windspeed_unit: weather
                .windspeed_unit
                .or_else(|| Some(DEFAULT_WINDSPEED_UNIT.into())),
        }),
        apps: Some(apps),
        aliases: Some(config.aliases.unwrap_or_default()),
    }
}
