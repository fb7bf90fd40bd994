//! alertcast - wires a console and a file receiver to one publisher and
//! fires a single notification.

use alertcast::{app, cli::Cli, config::Config, logging};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).context("Failed to load configuration")?;

    logging::init(&config.log_level);

    debug!(?config, "Configuration loaded");
    info!(
        console = config.receivers.console,
        file = config.receivers.file,
        log_file = %config.receivers.log_file.display(),
        "alertcast starting"
    );

    let summary = app::run(&config);

    info!(
        receivers = summary.receivers,
        skipped_file_writes = summary.skipped_file_writes,
        "Notification delivered"
    );
    Ok(())
}
