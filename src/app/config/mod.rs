//! Environment- and file-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::configuration`; this module only
//! decides where values come from.

mod credential;
mod load_config;

pub use credential::resolve_configuration_state;
pub use load_config::load_config;
