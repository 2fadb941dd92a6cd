//! Error types for repository operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::RunnerError;

/// Errors from queries against an existing repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The binary could not be executed.
    #[error(transparent)]
    Runner(#[from] RunnerError),
    /// The command ran but exited non-zero where no "absent" result applies.
    #[error("`{command}` exited with status {exit_code}{}", first_line(.output))]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Its exit code.
        exit_code: i32,
        /// Everything it printed.
        output: Vec<String>,
    },
    /// The search string was not a valid regular expression.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors from creating a new repository.
#[derive(Debug, Error)]
pub enum InitError {
    /// A control directory is already present.
    #[error("repository already exists in {}", .path.display())]
    AlreadyExists {
        /// The directory that already holds a repository.
        path: PathBuf,
    },
    /// The target directory could not be created.
    #[error("unable to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// `git init` exited non-zero.
    #[error(
        "git init failed in {} with status {exit_code}{}",
        .path.display(),
        first_line(.output)
    )]
    ToolInitFailed {
        /// The directory init ran in.
        path: PathBuf,
        /// Its exit code.
        exit_code: i32,
        /// Everything it printed.
        output: Vec<String>,
    },
    /// The binary could not be executed.
    #[error(transparent)]
    Runner(#[from] RunnerError),
    /// The configured binary was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rejected configuration values. The previous value stays in effect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The binary path contains a command separator.
    #[error("invalid git binary {0:?}: must not contain ';'")]
    InvalidBinary(String),
}

fn first_line(output: &[String]) -> String {
    output.iter().find(|l| !l.trim().is_empty()).map(|l| format!(": {l}")).unwrap_or_default()
}
