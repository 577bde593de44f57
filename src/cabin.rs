// ABOUTME: Cabin — entry point that runs a block of work as a timed, buffered logging scope.
// ABOUTME: Holds the injected log directory and hands out sessions bound to files inside it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;

use crate::config::Config;
use crate::session::{FlushOutcome, Options, Session};

/// Runs logging scopes against files in one log directory.
#[derive(Debug, Clone)]
pub struct Cabin {
    log_dir: PathBuf,
}

impl Cabin {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_dir.clone())
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Open a session without running a scope. The caller is responsible for
    /// timing and for calling [`Session::write_log_with_duration`].
    pub fn session(&self, name: &str, options: Options) -> Session {
        Session::new(&self.log_dir, name, options)
    }

    /// Run `scope` with a fresh session, then append its entries and a
    /// duration record to `<log_dir>/<name>.log`.
    ///
    /// If `scope` fails, its error is returned and nothing is written.
    pub fn log_to<T>(
        &self,
        name: &str,
        options: Options,
        scope: impl FnOnce(&mut Session) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let scoped = self.run_scope(name, options, scope)?;
        scoped.flush?;
        Ok(scoped.value)
    }

    /// Like [`Cabin::log_to`], but a failed flush is handed back next to the
    /// scope's value instead of replacing it.
    ///
    /// Only an error from `scope` itself is returned as `Err`; nothing is
    /// written in that case.
    pub fn run_scope<T>(
        &self,
        name: &str,
        options: Options,
        scope: impl FnOnce(&mut Session) -> anyhow::Result<T>,
    ) -> anyhow::Result<Scoped<T>> {
        let mut session = self.session(name, options);
        let start = Local::now();
        let clock = Instant::now();

        let value = scope(&mut session)?;

        let elapsed = clock.elapsed();
        let flush = session.write_log_with_duration(start, elapsed);
        Ok(Scoped { value, flush })
    }
}

/// A completed scope: what the block returned and how its flush went.
#[derive(Debug)]
pub struct Scoped<T> {
    pub value: T,
    pub flush: anyhow::Result<FlushOutcome>,
}
