//! Core domain types and the receiver trait contract for alertcast
//!
//! This module defines the severity levels a notification can carry and the
//! `NotificationReceiver` capability that every listener implements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The severity attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something looks wrong but processing continues.
    Warning,
    /// An operation failed.
    Error,
    /// An unrecoverable failure.
    Fatal,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Warning, Severity::Error, Severity::Fatal];

    /// The lower-case name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// The label written in front of a message, e.g. `FATAL ERROR`.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL ERROR",
        }
    }

    /// Formats a message as a single output line, without the terminator.
    pub fn format_line(&self, message: &str) -> String {
        format!("{}: {}", self.label(), message)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a severity.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown severity '{0}', expected one of: warning, error, fatal")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" | "fatal error" | "fatal_error" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

// =============================================================================
// Receiver Trait
// =============================================================================

/// Something that can accept severity-tagged messages.
///
/// Every handler defaults to doing nothing, so an implementation only
/// overrides the severities it cares about. Handlers take `&self`; a receiver
/// that needs mutable state should use interior mutability.
pub trait NotificationReceiver {
    /// A short, descriptive name used in log output (e.g. "console", "file").
    fn name(&self) -> &str {
        "receiver"
    }

    /// Handles a warning.
    fn on_warning(&self, _message: &str) {}

    /// Handles an error.
    fn on_error(&self, _message: &str) {}

    /// Handles a fatal error.
    fn on_fatal(&self, _message: &str) {}

    /// Routes a notification to the handler matching `severity`.
    fn on_notification(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => self.on_warning(message),
            Severity::Error => self.on_error(message),
            Severity::Fatal => self.on_fatal(message),
        }
    }
}
