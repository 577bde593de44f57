// ABOUTME: Entry point for cabin — runs a command as a logging scope.
// ABOUTME: Parses CLI args, loads config, and appends the command's output and duration to <name>.log.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use logcabin::command::record_command;
use logcabin::{Cabin, Config, Options};

/// Run a command and append its output and running time to a named log file.
#[derive(Debug, Parser)]
#[command(name = "cabin", version)]
struct Cli {
    /// Config file (defaults to ~/.logcabin/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for log files, overriding the config.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Only write the log if this is true.
    #[arg(long = "if", value_name = "BOOL")]
    if_condition: Option<bool>,

    /// Only write the log if this is false.
    #[arg(long, value_name = "BOOL")]
    unless: Option<bool>,

    /// Log name; the file is <log-dir>/<name>.log.
    name: String,

    /// Command to run, after `--`.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    command: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            if_condition: self.if_condition,
            unless_condition: self.unless,
        }
    }
}

fn main() -> ExitCode {
    // RUST_LOG=logcabin=debug shows flush decisions.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = execute(cli, &mut std::io::stdout(), &mut std::io::stderr());
    ExitCode::from(code)
}

/// Run the CLI and turn any error into a message on `err` and exit code 1.
fn execute(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match run(cli, out, err) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "cabin: {e:#}");
            1
        }
    }
}

/// Run the command as a scope and relay its output.
///
/// Returns the child's exit code. A failed log write is reported on `err`
/// but does not replace that code.
fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<u8> {
    let options = cli.options();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.log_dir {
        config.log_dir = dir;
    }
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;

    let Some((program, args)) = cli.command.split_first() else {
        anyhow::bail!("no command given");
    };

    let cabin = Cabin::from_config(&config);
    tracing::debug!(name = %cli.name, log_dir = %cabin.log_dir().display(), "running scope");
    let scoped = cabin.run_scope(&cli.name, options, |log| record_command(log, program, args))?;

    let output = scoped.value;
    out.write_all(output.stdout.as_bytes())?;
    err.write_all(output.stderr.as_bytes())?;
    if let Err(e) = scoped.flush {
        writeln!(err, "cabin: {e:#}")?;
    }

    Ok(exit_code(output.code))
}

/// The child's exit code, or 1 if it was killed by a signal.
fn exit_code(code: Option<i32>) -> u8 {
    code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1)
}
