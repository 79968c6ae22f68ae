//! Subprocess invocation with full stream capture.
//!
//! Each scenario spawns exactly one converter process and blocks until it
//! exits, with both stdout and stderr drained to completion. There are no
//! timeouts: a hung converter blocks the suite.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

/// Captured output of a completed converter invocation.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Everything written to stdout, decoded as UTF-8 (lossy).
    pub stdout: String,
    /// Everything written to stderr, decoded as UTF-8 (lossy).
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// A single converter invocation: program path plus ordered argument list.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Path of the converter program to spawn.
    pub program: PathBuf,
    /// Ordered command-line arguments.
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation of `program` with `args`.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Spawns the program and drains stdout and stderr to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned (missing binary,
    /// permission denied). Everything a running converter does — including
    /// a non-zero exit — is reported through [`Capture`], not as an error.
    pub fn run(&self) -> Result<Capture> {
        tracing::debug!(
            program = %self.program.display(),
            args = ?self.args,
            "invoking converter"
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .with_context(|| format!("failed to execute {}", self.program.display()))?;
        let capture = Capture {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        tracing::debug!(
            program = %self.program.display(),
            exit_code = ?capture.exit_code,
            stdout_bytes = capture.stdout.len(),
            stderr_bytes = capture.stderr.len(),
            "converter finished"
        );
        Ok(capture)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn captures_stdout_and_exit_code() {
        let capture = Invocation::new("/bin/sh", vec!["-c".into(), "printf hello".into()])
            .run()
            .unwrap();
        assert_eq!(capture.stdout, "hello");
        assert_eq!(capture.stderr, "");
        assert_eq!(capture.exit_code, Some(0));
    }

    #[test]
    fn captures_stderr_separately() {
        let capture = Invocation::new(
            "/bin/sh",
            vec!["-c".into(), "printf out; printf err 1>&2".into()],
        )
        .run()
        .unwrap();
        assert_eq!(capture.stdout, "out");
        assert_eq!(capture.stderr, "err");
    }

    #[test]
    fn nonzero_exit_is_captured_not_an_error() {
        let capture = Invocation::new("/bin/sh", vec!["-c".into(), "exit 3".into()])
            .run()
            .unwrap();
        assert_eq!(capture.exit_code, Some(3));
    }

    #[test]
    fn missing_program_is_an_error() {
        let result = Invocation::new("/nonexistent/converter", Vec::new()).run();
        assert!(result.is_err());
    }
}
