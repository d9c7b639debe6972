//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config file was named explicitly but does not exist.
    ///
    /// The *default* config location is allowed to be absent (built-in
    /// defaults apply); only an explicit `--config` path is required to exist.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// The config file exists but could not be read.
    #[error("failed to read configuration file: {path}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has unknown fields.
    #[error("failed to parse configuration file: {path}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A parsed value failed a semantic check.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Description of the validation failure.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
