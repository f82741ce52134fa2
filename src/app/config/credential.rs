//! Credential resolution from the process environment.

use crate::domain::ConfigurationState;
use crate::domain::session::API_KEY_ENV;

/// Read `GEMINI_API_KEY` once and decide whether generation is available.
pub fn resolve_configuration_state() -> ConfigurationState {
    ConfigurationState::from_credential(std::env::var(API_KEY_ENV).ok())
}
