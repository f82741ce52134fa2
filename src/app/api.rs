//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::io;
use std::path::PathBuf;

use crate::app::cli::DialoguerCollector;
use crate::app::commands::{catalog, prompt, session};
use crate::app::{AppContext, config};
use crate::domain::{GenerationConfig, SessionContext};
use crate::services::{FilesystemArtifactStore, HttpGeminiClient};

pub use crate::app::commands::catalog::FeatureSummary;
pub use crate::app::commands::prompt::PromptPreviewOptions;
pub use crate::domain::AppError;

/// Overrides for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Settings file; `./coachbot.toml` is used when present otherwise.
    pub config: Option<PathBuf>,
    /// Creativity level; falls back to `[generation] temperature`.
    pub temperature: Option<f32>,
    /// Directory for downloaded plans; falls back to `[output] artifact_dir`.
    pub output_dir: Option<PathBuf>,
}

/// Run the interactive coaching session on the terminal.
///
/// The credential is checked once before anything is asked. Without it the
/// session does not start and a configuration error is returned.
pub fn session(options: SessionOptions) -> Result<(), AppError> {
    let config = config::load_config(options.config.as_deref())?;
    let state = config::resolve_configuration_state();
    let api_key = match state.api_key() {
        Ok(key) => key.clone(),
        Err(err) => {
            eprintln!("⚠️  API key is not configured properly!");
            eprintln!("Set the Gemini API key in the environment before starting coachbot:");
            eprintln!("  export GEMINI_API_KEY=\"your-api-key-here\"");
            return Err(err);
        }
    };

    let temperature = options.temperature.unwrap_or(config.generation.temperature);
    let generation = GenerationConfig::with_temperature(temperature)?;
    let client = HttpGeminiClient::new(api_key, &config.gemini)?;
    let artifacts =
        FilesystemArtifactStore::new(options.output_dir.unwrap_or(config.output.artifact_dir));
    let ctx = AppContext::new(client, artifacts, config.gemini.model, generation);

    eprintln!("✅ API configured (model: {}, creativity: {})", ctx.model(), temperature);
    let mut session_context = SessionContext::new(state);
    let mut collector = DialoguerCollector::new();
    session::run(&ctx, &mut session_context, &mut collector, &mut io::stdout().lock())
}

/// Compile a prompt without contacting the generation service.
pub fn prompt_preview(options: &PromptPreviewOptions) -> Result<String, AppError> {
    prompt::execute(options)
}

/// The coaching feature catalog.
pub fn features() -> Vec<FeatureSummary> {
    catalog::list()
}
