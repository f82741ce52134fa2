use std::io;

use thiserror::Error;

/// Library-wide error type for coachbot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Credential or configuration file issue. Disables generation until fixed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote text-generation call failed for any reason.
    #[error("Error generating coaching plan: {0}")]
    GenerationFailed(String),

    /// Feature code is not part of the catalog.
    #[error("Unknown feature '{0}'. Run 'coachbot features' to list the available codes")]
    UnknownFeature(String),

    /// Sport name is not part of the catalog.
    #[error("Unknown sport '{0}'")]
    UnknownSport(String),

    /// Position does not belong to the position list of the sport.
    #[error("Position '{position}' is not available for {sport}. Choose one of: {available}")]
    InvalidPosition { sport: String, position: String, available: String },

    /// Athlete age outside the supported range.
    #[error("Age {0} is outside the supported range of 10-25")]
    AgeOutOfRange(u8),

    /// A form value failed its type, range or enumeration check.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Prompt template could not be loaded or rendered.
    #[error("Prompt rendering failed for '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// Terminal prompt could not be read.
    #[error("Failed to read input: {0}")]
    Interaction(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidInput { field: field.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnknownFeature(_)
            | AppError::UnknownSport(_)
            | AppError::InvalidPosition { .. }
            | AppError::AgeOutOfRange(_)
            | AppError::InvalidInput { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::GenerationFailed(_)
            | AppError::PromptRender { .. }
            | AppError::Interaction(_) => io::ErrorKind::Other,
        }
    }
}
