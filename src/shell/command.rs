//! Subprocess execution.

use crate::error::{HookError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running a command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }
}

/// Runs external programs.
///
/// The installer talks to the outside world only through this trait, so
/// tests can substitute [`MockRunner`](super::MockRunner) for real processes.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is reported through [`CommandResult`], not as an
    /// error; `Err` means the program could not be run at all.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult>;
}

/// Runs programs as child processes sharing this process's stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!(program, ?args, "Spawning command");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| HookError::CommandSpawn {
                command: display_command(program, args),
                source,
            })?;

        let duration = start.elapsed();
        tracing::debug!(code = ?status.code(), ?duration, "Command finished");

        if status.success() {
            Ok(CommandResult::success(duration))
        } else {
            Ok(CommandResult::failure(status.code(), duration))
        }
    }
}

/// Render a program and its arguments as a single line for display.
///
/// Arguments containing whitespace are single-quoted.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| {
            if part.is_empty() || part.chars().any(char::is_whitespace) {
                format!("'{}'", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn run_successful_command() {
        let result = SystemRunner::new().run("sh", &args(&["-c", "exit 0"])).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn run_failing_command_reports_exit_code() {
        let result = SystemRunner::new().run("sh", &args(&["-c", "exit 3"])).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn run_missing_program_is_spawn_error() {
        let err = SystemRunner::new()
            .run("definitely-not-a-real-program-xyz", &args(&["--version"]))
            .unwrap_err();

        match err {
            HookError::CommandSpawn { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-program-xyz --version");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn command_result_tracks_duration() {
        let result = SystemRunner::new().run("sh", &args(&["-c", "exit 0"])).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn display_command_joins_parts() {
        assert_eq!(
            display_command("python3", &args(&["-m", "pip", "install"])),
            "python3 -m pip install"
        );
    }

    #[test]
    fn display_command_quotes_whitespace() {
        assert_eq!(
            display_command("python3", &args(&["-r", "my docs/requirements.txt"])),
            "python3 -r 'my docs/requirements.txt'"
        );
    }

    #[test]
    fn command_result_constructors() {
        let ok = CommandResult::success(Duration::from_millis(5));
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));

        let failed = CommandResult::failure(None, Duration::from_millis(5));
        assert!(!failed.success);
        assert_eq!(failed.exit_code, None);
    }
}
