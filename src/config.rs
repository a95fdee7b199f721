use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::ScoringWeights;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("scoring weights must sum to 1.0, got {0}")]
    UnnormalizedWeights(f64),

    #[error("weather.forecast_days must be between 1 and 16, got {0}")]
    InvalidForecastDays(u8),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub planning: PlanningSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_cost_level_weight")]
    pub cost_level: f64,
    #[serde(default = "default_activities_weight")]
    pub activities: f64,
    #[serde(default = "default_travel_style_weight")]
    pub travel_style: f64,
    #[serde(default = "default_climate_weight")]
    pub climate: f64,
    #[serde(default = "default_popularity_weight")]
    pub popularity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            cost_level: default_cost_level_weight(),
            activities: default_activities_weight(),
            travel_style: default_travel_style_weight(),
            climate: default_climate_weight(),
            popularity: default_popularity_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            cost_level: config.cost_level,
            activities: config.activities,
            travel_style: config.travel_style,
            climate: config.climate,
            popularity: config.popularity,
        }
    }
}

fn default_cost_level_weight() -> f64 { 0.25 }
fn default_activities_weight() -> f64 { 0.30 }
fn default_travel_style_weight() -> f64 { 0.20 }
fn default_climate_weight() -> f64 { 0.15 }
fn default_popularity_weight() -> f64 { 0.10 }

/// Live forecast collaborator settings
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    /// Attach a live forecast to weather insights
    #[serde(default)]
    pub live_forecast: bool,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_cache_size")]
    pub cache_size: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_secs: default_timeout_secs(),
            forecast_days: default_forecast_days(),
            live_forecast: false,
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_size: default_cache_size(),
        }
    }
}

fn default_geocoding_url() -> String { "https://geocoding-api.open-meteo.com/v1/search".to_string() }
fn default_forecast_url() -> String { "https://api.open-meteo.com/v1/forecast".to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_forecast_days() -> u8 { 7 }
fn default_cache_ttl_secs() -> u64 { 3600 }
fn default_cache_size() -> u64 { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanningSettings {
    /// Fixed seed for itinerary sampling and simulated forecasts
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with TRIPWISE__)
    /// 4. Bare PORT, LOG_LEVEL and LOG_FORMAT variables
    pub fn load() -> Result<Self, SettingsError> {
        let builder = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source());

        Self::finish(builder.build()?, EnvOverrides::from_env())
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let config = defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::finish(config, EnvOverrides::from_env())
    }

    fn finish(config: Config, overrides: EnvOverrides) -> Result<Self, SettingsError> {
        let mut builder = Config::builder().add_source(config);

        if let Some(port) = overrides.port {
            let parsed: u16 = port
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidPort(port.clone()))?;
            builder = builder.set_override("server.port", i64::from(parsed))?;
        }
        if let Some(level) = overrides.log_level {
            builder = builder.set_override("logging.level", level)?;
        }
        if let Some(format) = overrides.log_format {
            builder = builder.set_override("logging.format", format)?;
        }

        let config = builder.build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the services cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let weights = self.scoring_weights();
        if !weights.is_normalized() {
            return Err(SettingsError::UnnormalizedWeights(weights.total()));
        }

        if !(1..=16).contains(&self.weather.forecast_days) {
            return Err(SettingsError::InvalidForecastDays(self.weather.forecast_days));
        }

        Ok(())
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5001)
}

// e.g., TRIPWISE__SERVER__PORT -> server.port
/// Bare environment variables that take precedence over every other layer
#[derive(Debug, Default)]
struct EnvOverrides {
    port: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_format: std::env::var("LOG_FORMAT").ok(),
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TRIPWISE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
