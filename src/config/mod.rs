//! Configuration file loading and parsing.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path specified via `--config` CLI flag (must exist)
//! 2. Default location, which may be absent (built-in defaults apply):
//!    - **Linux/macOS:** `~/.catalog-edit/config.json`
//!    - **Windows:** `%USERPROFILE%\.catalog-edit\config.json`

mod settings;

pub use settings::{Config, LoggingConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".catalog-edit"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// An explicit `path` must exist. When `path` is `None`, the default
/// location is tried; if no file is there (or the home directory cannot be
/// determined) the built-in [`Config::default`] is returned.
///
/// # Errors
///
/// Returns an error if an explicitly named file is missing, if the file
/// cannot be read, if the JSON is malformed, or if validation fails.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => {
            let Some(default) = default_config_path() else {
                return Ok(Config::default());
            };
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}
