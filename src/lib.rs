//! coachbot: personal AI sports coaching for youth athletes.
//!
//! Collects an athlete profile and feature-specific inputs, compiles a
//! deterministic prompt, and asks the Gemini API for a coaching plan.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FeatureSummary, PromptPreviewOptions, SessionOptions, features, prompt_preview, session,
};
pub use domain::AppError;
