//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::search::SearchKind;

/// Top-level CLI parser for `repoprobe`.
#[derive(Debug, Parser)]
#[command(name = "repoprobe", version, about = "Query a git repository and print typed results")]
pub struct Cli {
    /// Repository to query. Overrides `REPOPROBE_REPO`; defaults to the current directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Git binary to run. Overrides `REPOPROBE_GIT`.
    #[arg(long, global = true, value_name = "BINARY")]
    pub git: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Commits touching a file, newest first.
    Log {
        /// Repository-relative path.
        file: String,
        /// Only the newest commit.
        #[arg(long)]
        last: bool,
        /// Only commits after this Unix timestamp.
        #[arg(long, value_name = "SECONDS")]
        since: Option<i64>,
    },
    /// Object hash of a file at HEAD.
    Hash {
        /// Repository-relative path.
        file: String,
    },
    /// Diff of a file between two revisions.
    Diff {
        /// Repository-relative path.
        file: String,
        /// Older revision.
        from: String,
        /// Newer revision.
        to: String,
        /// Keep the four header lines.
        #[arg(long)]
        header: bool,
    },
    /// Content of a file at a revision.
    Show {
        /// Revision to read from.
        commit: String,
        /// Repository-relative path.
        file: String,
    },
    /// Content of an object by hash.
    Object {
        /// Object hash.
        hash: String,
    },
    /// Newest commit at or before a date.
    At {
        /// Any date git's `--until` accepts.
        date: String,
        /// Restrict to commits touching this path.
        file: Option<String>,
    },
    /// Tracked files, optionally filtered.
    Files {
        /// Only paths matching this search string.
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
        /// How `--search` is matched.
        #[arg(long = "match", value_enum, default_value_t = MatchArg::Substring)]
        match_kind: MatchArg,
        /// Print a directory tree instead of a flat list.
        #[arg(long)]
        tree: bool,
    },
    /// Whether the path is an initialized repository and a working-tree root.
    Status,
    /// Create a repository.
    Init {
        /// Directory to initialize; created when missing.
        directory: PathBuf,
        /// Extra arguments for `git init`, after `--`.
        #[arg(last = true)]
        params: Vec<String>,
    },
}

/// Command-line spelling of [`SearchKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchArg {
    /// Regular expression.
    Regex,
    /// Substring found after the first character.
    Substring,
    /// Plain containment.
    Contains,
}

impl From<MatchArg> for SearchKind {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Regex => Self::Regex,
            MatchArg::Substring => Self::Substring,
            MatchArg::Contains => Self::Contains,
        }
    }
}
