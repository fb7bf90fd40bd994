//! Sample receivers
//!
//! `ConsoleReceiver` prints warnings and fatal errors to standard output.
//! `FileReceiver` appends errors and fatal errors to a log file. Both are
//! best effort: a failed write is skipped, never reported to the publisher.

use crate::core::{NotificationReceiver, Severity};
use std::cell::{Cell, RefCell};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `WARNING` and `FATAL ERROR` lines to a console stream.
pub struct ConsoleReceiver<W: Write = io::Stdout> {
    writer: RefCell<W>,
}

impl ConsoleReceiver<io::Stdout> {
    /// Creates a receiver that writes to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReceiver<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReceiver<W> {
    /// Creates a receiver that writes to `writer` instead of standard output.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Consumes the receiver and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_line(&self, severity: Severity, message: &str) {
        let mut writer = self.writer.borrow_mut();
        let result = writeln!(writer, "{}", severity.format_line(message))
            .and_then(|_| writer.flush());
        if let Err(e) = result {
            debug!(error = %e, "Console write skipped");
        }
    }
}

impl<W: Write> NotificationReceiver for ConsoleReceiver<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn on_warning(&self, message: &str) {
        self.write_line(Severity::Warning, message);
    }

    fn on_fatal(&self, message: &str) {
        self.write_line(Severity::Fatal, message);
    }
}

/// Appends `ERROR` and `FATAL ERROR` lines to a file.
///
/// The file is opened in append mode (and created if missing) for every
/// write and closed straight after; no handle is kept between calls.
#[derive(Debug)]
pub struct FileReceiver {
    path: PathBuf,
    skipped: Cell<u64>,
}

impl FileReceiver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skipped: Cell::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of writes dropped because the file could not be opened or
    /// written.
    pub fn skipped_writes(&self) -> u64 {
        self.skipped.get()
    }

    fn append_line(&self, severity: Severity, message: &str) {
        if let Err(e) = self.try_append(severity, message) {
            self.skipped.set(self.skipped.get() + 1);
            debug!(path = %self.path.display(), error = %e, "Log file write skipped");
        }
    }

    fn try_append(&self, severity: Severity, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", severity.format_line(message))
    }
}

impl NotificationReceiver for FileReceiver {
    fn name(&self) -> &str {
        "file"
    }

    fn on_error(&self, message: &str) {
        self.append_line(Severity::Error, message);
    }

    fn on_fatal(&self, message: &str) {
        self.append_line(Severity::Fatal, message);
    }
}
