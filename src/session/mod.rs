// ABOUTME: Session module — buffered, timed logging scopes bound to a log file.
// ABOUTME: Entries, the persist gate, and the session that flushes them.

pub mod entry;
pub mod log;
pub mod options;

pub use entry::{Entry, Level};
pub use log::{START_FORMAT, Session, log_file_path, sanitize_name};
pub use options::{FlushOutcome, Options};
