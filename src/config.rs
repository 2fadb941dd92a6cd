//! Configuration: the git binary and environment-driven settings.

use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use crate::error::ConfigError;

/// Environment variable naming the repository to probe.
pub const REPO_ENV: &str = "REPOPROBE_REPO";
/// Environment variable naming the git binary.
pub const GIT_ENV: &str = "REPOPROBE_GIT";
/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "REPOPROBE_RECORD";
/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "REPOPROBE_LOG";

/// The binary every command is run with.
///
/// Values containing `;` are rejected so that one configured value cannot
/// smuggle a second command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBinary(String);

impl GitBinary {
    /// Separator that may not appear in a binary path.
    pub const SEPARATOR: char = ';';

    /// Validates a binary path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBinary`] if `value` contains `;`.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.contains(Self::SEPARATOR) {
            warn!(binary = %value, "rejecting git binary containing a command separator");
            return Err(ConfigError::InvalidBinary(value));
        }
        Ok(Self(value))
    }

    /// The binary path as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GitBinary {
    fn default() -> Self {
        Self("git".to_string())
    }
}

impl fmt::Display for GitBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Repository to probe; the current directory when unset.
    pub repo: Option<PathBuf>,
    /// Binary to run.
    pub git: GitBinary,
    /// Directory to record port interactions into.
    pub record_dir: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` if present, then reads the `REPOPROBE_*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REPOPROBE_GIT` is not a valid binary.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the git binary value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let git = match non_empty(GIT_ENV) {
            Some(value) => GitBinary::new(value)?,
            None => GitBinary::default(),
        };
        Ok(Self {
            repo: non_empty(REPO_ENV).map(PathBuf::from),
            git,
            record_dir: non_empty(RECORD_ENV).map(PathBuf::from),
        })
    }

    /// The repository path, defaulting to the current directory.
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
