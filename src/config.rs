//! Configuration management for alertcast
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer, from lowest to highest priority: built-in
//! defaults, an `alertcast.toml` file, `ALERTCAST_` environment variables and
//! command-line flags.

use crate::cli::Cli;
use crate::core::Severity;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given. A missing default file is
/// not an error.
pub const DEFAULT_CONFIG_FILE: &str = "alertcast.toml";

/// Prefix for environment overrides. Nested keys are separated with `__`,
/// e.g. `ALERTCAST_RECEIVERS__LOG_FILE=/tmp/log.txt`.
pub const ENV_PREFIX: &str = "ALERTCAST_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(Box<figment::Error>),
    #[error("file receiver is enabled but no log file path is configured")]
    EmptyLogFile,
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Invalid(Box::new(err))
    }
}

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Filter directive for diagnostic logging, e.g. "info" or "alertcast=debug".
    pub log_level: String,
    /// Which receivers to wire up.
    pub receivers: ReceiversConfig,
    /// The notification fired by the demo run.
    pub notification: NotificationConfig,
}

/// Configuration for the sample receivers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReceiversConfig {
    /// Subscribe the console receiver.
    pub console: bool,
    /// Subscribe the file receiver.
    pub file: bool,
    /// Path the file receiver appends to.
    pub log_file: PathBuf,
}

/// The notification to emit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub severity: Severity,
    pub message: String,
}

impl Config {
    /// Loads the configuration, merging the file named by `cli.config` (or
    /// `alertcast.toml`), the environment and the CLI flags over the defaults.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config_path = match &cli.config {
            Some(path) if !path.exists() => return Err(ConfigError::MissingFile(path.clone())),
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let config: Config = Self::figment(&config_path).merge(cli.clone()).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The layered sources below the command line.
    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.receivers.file && self.receivers.log_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLogFile);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            receivers: ReceiversConfig {
                console: true,
                file: true,
                log_file: PathBuf::from("log.txt"),
            },
            notification: NotificationConfig {
                severity: Severity::Fatal,
                message: "Fatal error message".to_string(),
            },
        }
    }
}
