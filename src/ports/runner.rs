//! Command runner port for executing the version-control binary.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The captured result of one command execution.
///
/// A non-zero `exit_code` is a valid, inspectable result. Only failures to
/// execute at all are reported as [`RunnerError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOutput {
    /// Captured output lines, stdout first, then stderr.
    pub lines: Vec<String>,
    /// The exit code of the process (`-1` when killed by a signal).
    pub exit_code: i32,
}

impl RunOutput {
    /// Returns `true` if the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Joins the captured lines with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Failure to execute a command at all.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The argument vector had no program name.
    #[error("empty argument vector")]
    EmptyArgv,
    /// The program could not be spawned or its output could not be read.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        /// The program that was invoked.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An execution failure served back from a cassette.
    #[error("{0}")]
    Replayed(String),
}

/// Executes an argument vector inside a working directory.
///
/// `argv[0]` is the binary to invoke. Abstracting execution allows
/// deterministic replay of recorded tool output in tests.
pub trait CommandRunner: Send + Sync {
    /// Runs `argv` with `workdir` as the current directory and captures its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned. A non-zero exit
    /// status is not an error.
    fn run(&self, workdir: &Path, argv: &[String]) -> Result<RunOutput, RunnerError>;
}
