//! Settings file loading.

use std::path::{Path, PathBuf};

use crate::domain::configuration::{CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{AppConfig, AppError};

/// Load settings from `explicit`, or from `./coachbot.toml` when present.
///
/// An explicitly named file must exist. Without one, a missing default file
/// yields built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.is_file() {
                return Ok(AppConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_config_content(&content).map_err(|err| match err {
        AppError::Configuration(message) => {
            AppError::Configuration(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}
