// ABOUTME: Buffered session logger — collects entries for one scope and appends them to a log file.
// ABOUTME: Writes <log_dir>/<sanitized name>.log as a single block followed by a blank line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Local};

use super::entry::{Entry, Level};
use super::options::{FlushOutcome, Options};

/// chrono format for the start timestamp in the duration record.
pub const START_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Strip every character outside `[A-Za-z0-9_-]` from a session name.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Resolve the log file for `name` under `log_dir`.
///
/// A name that sanitizes to nothing still resolves, to `<log_dir>/.log`.
pub fn log_file_path(log_dir: &Path, name: &str) -> PathBuf {
    log_dir.join(format!("{}.log", sanitize_name(name)))
}

/// Buffers log entries for one unit of work until the scope ends.
#[derive(Debug)]
pub struct Session {
    file_path: PathBuf,
    entries: Vec<Entry>,
    options: Options,
}

impl Session {
    /// Create a session bound to `<log_dir>/<name>.log`. Nothing is written yet.
    pub fn new(log_dir: &Path, name: &str, options: Options) -> Self {
        Self {
            file_path: log_file_path(log_dir, name),
            entries: Vec::new(),
            options,
        }
    }

    /// Buffer an INFO entry.
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    /// Buffer a DEBUG entry.
    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// Buffer a WARN entry.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    /// The log file this session appends to.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Entries buffered so far, in the order they were logged.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The persist gate this session was created with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Record how long the scope took, then flush the buffer.
    ///
    /// Consumes the session: once written, its entries can no longer change.
    pub fn write_log_with_duration(
        mut self,
        start: DateTime<Local>,
        elapsed: Duration,
    ) -> anyhow::Result<FlushOutcome> {
        let message = format!(
            "{}: Operation took {} seconds",
            start.format(START_FORMAT),
            elapsed.as_secs_f64()
        );
        self.log(Level::Time, message);
        self.write_log()
    }

    fn log(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push(Entry::new(level, message));
    }

    /// The text appended to the file: one rendered entry per line, then a blank line.
    fn render_block(&self) -> String {
        let mut block = String::new();
        for entry in &self.entries {
            block.push_str(&entry.render());
            block.push('\n');
        }
        block.push('\n');
        block
    }

    fn write_log(&self) -> anyhow::Result<FlushOutcome> {
        if !self.options.should_persist() {
            tracing::debug!(path = %self.file_path.display(), "session gate closed, skipping write");
            return Ok(FlushOutcome::Skipped);
        }

        // One write per block: concurrent appenders interleave between blocks.
        let block = self.render_block();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .with_context(|| format!("failed to open log file {}", self.file_path.display()))?;
        file.write_all(block.as_bytes())
            .with_context(|| format!("failed to append to log file {}", self.file_path.display()))?;

        tracing::debug!(
            path = %self.file_path.display(),
            entries = self.entries.len(),
            "session log written"
        );
        Ok(FlushOutcome::Written)
    }
}
