//! The demo application, decoupled from the entry point.
//!
//! Builds a `Publisher`, subscribes the receivers enabled in the
//! configuration and fires the configured notification once.

use crate::{
    config::Config,
    publisher::Publisher,
    receivers::{ConsoleReceiver, FileReceiver},
};
use std::io::{self, Write};
use tracing::{info, instrument};

/// What a single run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Receivers that were subscribed when the notification fired.
    pub receivers: usize,
    /// File writes the file receiver had to skip.
    pub skipped_file_writes: u64,
}

/// Runs the demo with the console receiver on standard output.
pub fn run(config: &Config) -> RunSummary {
    run_with_console(config, io::stdout()).0
}

/// Runs the demo with the console receiver writing to `console_writer`, and
/// hands the writer back.
#[instrument(skip_all, fields(severity = %config.notification.severity))]
pub fn run_with_console<W: Write>(config: &Config, console_writer: W) -> (RunSummary, W) {
    let console = ConsoleReceiver::with_writer(console_writer);
    let file = FileReceiver::new(&config.receivers.log_file);

    let summary = {
        let mut publisher = Publisher::new();
        if config.receivers.console {
            publisher.subscribe(&console);
        }
        if config.receivers.file {
            publisher.subscribe(&file);
        }
        info!(?publisher, "Publisher ready");

        publisher.notify(config.notification.severity, &config.notification.message);

        RunSummary {
            receivers: publisher.len(),
            skipped_file_writes: file.skipped_writes(),
        }
    };

    (summary, console.into_inner())
}
