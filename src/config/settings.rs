//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field is optional; CLI flags override anything set here.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Path to the catalogue HTML page. When unset, the CLI probes a fixed
    /// list of relative candidates (`index.html`, `../index.html`,
    /// `../../index.html`).
    #[serde(default)]
    pub html_path: Option<PathBuf>,

    /// Directory holding the JSON journal files. When unset, `data/` beside
    /// the HTML page is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log level is not one of
    /// `trace`, `debug`, `info`, `warn`, `error`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level.as_str()) {
            return Err(ConfigError::invalid(format!(
                "unknown log level '{}'; expected one of: trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.html_path.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "_comment": "Test config",
            "html_path": "/srv/site/index.html",
            "data_dir": "/srv/site/data",
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.html_path, Some(PathBuf::from("/srv/site/index.html")));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/site/data")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_invalid_log_level() {
        let json = r#"{
            "logging": { "level": "loud" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
