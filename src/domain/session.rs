//! Per-session state passed explicitly through the app layer.

use std::fmt;

use crate::domain::{AppError, History};

/// Environment variable holding the generation service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Credential for the generation service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::config_error(format!("{} is set but empty", API_KEY_ENV)));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(AppError::config_error(format!("{} contains whitespace", API_KEY_ENV)));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Whether the generation path is usable, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationState {
    Ready(ApiKey),
    Unavailable(String),
}

impl ConfigurationState {
    /// Resolve from an optional raw credential value.
    pub fn from_credential(raw: Option<String>) -> Self {
        match raw {
            None => ConfigurationState::Unavailable(format!(
                "{} is not set. Export it before starting coachbot.",
                API_KEY_ENV
            )),
            Some(value) => match ApiKey::new(value) {
                Ok(key) => ConfigurationState::Ready(key),
                Err(err) => ConfigurationState::Unavailable(err.to_string()),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ConfigurationState::Ready(_))
    }

    /// The credential, or the configuration error that disables generation.
    pub fn api_key(&self) -> Result<&ApiKey, AppError> {
        match self {
            ConfigurationState::Ready(key) => Ok(key),
            ConfigurationState::Unavailable(message) => {
                Err(AppError::Configuration(message.clone()))
            }
        }
    }
}

/// State owned by one interactive session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    configuration: ConfigurationState,
    history: History,
}

impl SessionContext {
    pub fn new(configuration: ConfigurationState) -> Self {
        Self { configuration, history: History::new() }
    }

    pub fn configuration(&self) -> &ConfigurationState {
        &self.configuration
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}
