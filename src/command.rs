// ABOUTME: Runs an external command inside a logging session and records its output.
// ABOUTME: stdout lines become INFO entries, stderr lines WARN entries, bracketed by DEBUG records.

use std::process::Command;

use anyhow::Context;

use crate::session::Session;

/// What the child process produced, for relaying back to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args` to completion, buffering its output into `log`.
///
/// Failing to spawn the program is an error; a non-zero exit is not.
pub fn record_command(
    log: &mut Session,
    program: &str,
    args: &[String],
) -> anyhow::Result<CommandOutput> {
    log.debug(format!("Running: {}", shell_line(program, args)));

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {program}"))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    for line in stdout.lines() {
        log.info(line);
    }
    for line in stderr.lines() {
        log.warn(line);
    }

    let code = output.status.code();
    match code {
        Some(code) => log.debug(format!("Exited with status {code}")),
        None => log.debug("Terminated by signal"),
    }

    Ok(CommandOutput {
        code,
        stdout,
        stderr,
    })
}

fn shell_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Entry, Options};

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn records_stdout_and_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = Session::new(tmp.path(), "cmd", Options::default());

        let output = record_command(&mut session, "sh", &sh("echo one; echo two; echo oops >&2")).unwrap();
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout, "one\ntwo\n");
        assert_eq!(output.stderr, "oops\n");

        let rendered: Vec<String> = session.entries().iter().map(Entry::render).collect();
        assert_eq!(
            rendered,
            vec![
                "DEBUG: Running: sh -c echo one; echo two; echo oops >&2",
                "INFO: one",
                "INFO: two",
                "WARN: oops",
                "DEBUG: Exited with status 0",
            ]
        );
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = Session::new(tmp.path(), "cmd", Options::default());

        let output = record_command(&mut session, "sh", &sh("exit 3")).unwrap();
        assert_eq!(output.code, Some(3));
        let last = session.entries().last().unwrap();
        assert_eq!(last.render(), "DEBUG: Exited with status 3");
    }

    #[test]
    fn missing_program_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = Session::new(tmp.path(), "cmd", Options::default());

        let err = record_command(&mut session, "definitely-not-a-real-program-xyz", &[]).unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-program-xyz"));
    }
}
