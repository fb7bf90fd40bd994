//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the `alertcast` binary
//! using the `clap` crate. `Cli` is also a figment `Provider`, so any flag that
//! is set overrides the value from the config file and the environment.

use crate::core::Severity;
use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Fans a single severity-tagged notification out to the console and a log file.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log filter (e.g. "debug", "alertcast=trace").
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// File the file receiver appends to.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Severity of the notification: warning, error or fatal.
    #[arg(short, long, value_name = "LEVEL")]
    pub severity: Option<Severity>,

    /// Message text of the notification.
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Do not subscribe the console receiver.
    #[arg(long)]
    pub no_console: bool,

    /// Do not subscribe the file receiver.
    #[arg(long)]
    pub no_file: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        let mut receivers = Dict::new();
        let mut notification = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        if let Some(path) = &self.log_file {
            receivers.insert(
                "log_file".into(),
                Value::from(path.to_string_lossy().into_owned()),
            );
        }

        // Absent switches leave the configured value alone; they can only
        // turn a receiver off.
        if self.no_console {
            receivers.insert("console".into(), Value::from(false));
        }
        if self.no_file {
            receivers.insert("file".into(), Value::from(false));
        }

        if let Some(severity) = self.severity {
            notification.insert("severity".into(), Value::from(severity.as_str()));
        }

        if let Some(message) = &self.message {
            notification.insert("message".into(), Value::from(message.clone()));
        }

        if !receivers.is_empty() {
            dict.insert("receivers".into(), Value::Dict(Tag::Default, receivers));
        }
        if !notification.is_empty() {
            dict.insert("notification".into(), Value::Dict(Tag::Default, notification));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
