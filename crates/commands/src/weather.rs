//! `weather` — current conditions for a city via the Open-Meteo API.
//!
//! Two-step fetch: geocode the city name to coordinates, then request the
//! current weather. Both endpoints and the units are configurable.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use adjutant_config::defaults::{
    DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_TEMPERATURE_UNIT, DEFAULT_WINDSPEED_UNIT,
};
use adjutant_config::WeatherConfig;
use adjutant_core::{argument, Command, CommandResult, EngineError};

use crate::render::banner;

const USAGE: &str = "Usage: weather <city>\nExample: weather rexburg";

pub struct WeatherCommand {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
    temperature_unit: String,
    windspeed_unit: String,
}

impl WeatherCommand {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            geocoding_url: config
                .geocoding_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GEOCODING_URL.into()),
            forecast_url: config
                .forecast_url
                .clone()
                .unwrap_or_else(|| DEFAULT_FORECAST_URL.into()),
            temperature_unit: config
                .temperature_unit
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPERATURE_UNIT.into()),
            windspeed_unit: config
                .windspeed_unit
                .clone()
                .unwrap_or_else(|| DEFAULT_WINDSPEED_UNIT.into()),
        }
    }

    fn temperature_symbol(&self) -> &'static str {
        if self.temperature_unit == "celsius" {
            "°C"
        } else {
            "°F"
        }
    }

    async fn fetch(&self, city: &str) -> Result<String> {
        let geo: GeoResponse = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request rejected")?
            .json()
            .await
            .context("geocoding response was not valid JSON")?;

        let Some(place) = geo.results.first() else {
            bail!("couldn't find city: {city}");
        };
        debug!(city = %place.name, lat = place.latitude, lon = place.longitude, "geocoded");

        let forecast: ForecastResponse = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                ("current_weather", "true".into()),
                ("temperature_unit", self.temperature_unit.clone()),
                ("windspeed_unit", self.windspeed_unit.clone()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request rejected")?
            .json()
            .await
            .context("forecast response was not valid JSON")?;

        let current = forecast.current_weather;
        Ok(format!(
            "🌍 {}\n🌡️ Temperature: {}{}\n💨 Wind speed:  {} {}\n☁️ Conditions:  {}",
            place.name,
            current.temperature,
            self.temperature_symbol(),
            current.windspeed,
            self.windspeed_unit,
            describe_weather_code(current.weathercode),
        ))
    }
}

#[async_trait]
impl Command for WeatherCommand {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Get current weather information for a city"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let city = argument(input, self.name());
        if city.is_empty() {
            return CommandResult::failure(USAGE);
        }

        match self.fetch(city).await {
            Ok(body) => CommandResult::success(banner("WEATHER INFORMATION", &body)),
            Err(err) => CommandResult::failure(format!("Error retrieving weather: {err:#}")),
        }
    }
}

// ---------------------------------------------------------------------------
// API responses
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

/// WMO weather interpretation codes, per the Open-Meteo docs.
fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        61 | 63 | 65 => "Rain",
        71 | 73 | 75 => "Snow",
        80 | 81 | 82 => "Rain showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_codes_map_to_descriptions() {
        assert_eq!(describe_weather_code(0), "Clear sky");
        assert_eq!(describe_weather_code(48), "Fog");
        assert_eq!(describe_weather_code(63), "Rain");
        assert_eq!(describe_weather_code(99), "Thunderstorm with hail");
        assert_eq!(describe_weather_code(1234), "Unknown");
    }

    #[test]
    fn units_decide_the_temperature_symbol() {
        let fahrenheit = WeatherCommand::new(&WeatherConfig::default());
        assert_eq!(fahrenheit.temperature_symbol(), "°F");

        let celsius = WeatherCommand::new(&WeatherConfig {
            temperature_unit: Some("celsius".into()),
            ..Default::default()
        });
        assert_eq!(celsius.temperature_symbol(), "°C");
    }

    #[tokio::test]
    async fn missing_city_returns_usage() {
        let cmd = WeatherCommand::new(&WeatherConfig::default());
        let result = cmd.execute("weather").await.unwrap();
        assert!(!result.is_success());
        assert!(result.render().contains("Usage: weather"));
    }

    #[tokio::test]
    async fn geocoding_parses_empty_results() {
        let geo: GeoResponse = serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(geo.results.is_empty());
    }
}
