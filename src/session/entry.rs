// ABOUTME: Log entry types — a fixed label set and the immutable (level, message) record.
// ABOUTME: Entries render as "LEVEL: message" with the label upper-cased.

use std::fmt;

/// The label attached to a buffered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Warn,
    /// Reserved for the duration record appended when a scope ends.
    Time,
}

impl Level {
    /// Lower-case identifier for this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Time => "time",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single buffered log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    level: Level,
    message: String,
}

impl Entry {
    /// Create an entry; the message is stored as given.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// The label this entry was logged under.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The caller's message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render as `LEVEL: message`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.level.as_str().to_uppercase(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uppercases_level() {
        assert_eq!(Entry::new(Level::Info, "hello").render(), "INFO: hello");
        assert_eq!(Entry::new(Level::Debug, "x = 1").render(), "DEBUG: x = 1");
        assert_eq!(Entry::new(Level::Warn, "careful").render(), "WARN: careful");
        assert_eq!(Entry::new(Level::Time, "1.5s").render(), "TIME: 1.5s");
    }

    #[test]
    fn render_is_idempotent() {
        let entry = Entry::new(Level::Warn, "disk nearly full");
        assert_eq!(entry.render(), entry.render());
    }

    #[test]
    fn message_stored_verbatim() {
        let entry = Entry::new(Level::Info, "  spaced: out  ");
        assert_eq!(entry.message(), "  spaced: out  ");
        assert_eq!(entry.level(), Level::Info);
        assert_eq!(entry.render(), "INFO:   spaced: out  ");
    }

    #[test]
    fn level_identifiers_are_lowercase() {
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Time.as_str(), "time");
    }
}
