//! Settings loaded from `coachbot.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::generation::{DEFAULT_TEMPERATURE, validate_temperature};

pub const CONFIG_FILE_NAME: &str = "coachbot.toml";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Top-level application settings. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        validate_temperature(self.generation.temperature)
            .map_err(|e| AppError::config_error(format!("[generation] {}", e)))?;
        Ok(())
    }
}

/// Remote generation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the generative language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Attempts per user action. Only a single attempt is supported.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("[gemini] model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("[gemini] timeout_secs must be greater than 0"));
        }
        if self.max_attempts != 1 {
            return Err(AppError::config_error(format!(
                "[gemini] max_attempts must be 1 (got {}); requests are never retried",
                self.max_attempts
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSettings {
    /// Creativity level used when no `--temperature` flag is given.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self { temperature: default_temperature() }
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Directory where downloaded plans are written.
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { artifact_dir: default_artifact_dir() }
    }
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Parse and validate configuration text.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
