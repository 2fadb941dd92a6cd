//! Typed introspection of git repositories through the git command-line tool.
//!
//! [`Repository`] turns a narrow set of git commands into typed results:
//! commit records, file hashes, diff bodies, file listings and directory
//! trees. Process execution and filesystem probes go through the ports in
//! [`ports`], so the same code runs live, records cassettes, or replays them
//! in tests.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod parse;
pub mod ports;
pub mod repo;
pub mod search;
pub mod tree;

pub use config::{Config, GitBinary};
pub use context::ServiceContext;
pub use error::{ConfigError, InitError, RepoError};
pub use parse::{CommitRecord, DiffResult};
pub use repo::{LogOptions, Repository};
pub use search::{FileSearch, SearchKind};
pub use tree::PathTree;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// `--help` and `--version` print to stdout and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
