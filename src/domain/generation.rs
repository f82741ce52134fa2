//! Sampling parameters and the request handed to a generation client.

use crate::domain::AppError;

pub const MIN_TEMPERATURE: f32 = 0.1;
pub const MAX_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Sampling parameters sent with every request.
///
/// Only the temperature is caller-adjustable; the rest are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationConfig {
    /// Default parameters with a caller-chosen temperature ("creativity level").
    pub fn with_temperature(temperature: f32) -> Result<Self, AppError> {
        validate_temperature(temperature)?;
        Ok(Self { temperature, ..Self::default() })
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}

pub fn validate_temperature(temperature: f32) -> Result<(), AppError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(AppError::invalid_input(
            "temperature",
            format!(
                "{} is outside the range {}-{}",
                temperature, MIN_TEMPERATURE, MAX_TEMPERATURE
            ),
        ));
    }
    Ok(())
}

/// A compiled prompt ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub config: GenerationConfig,
}
