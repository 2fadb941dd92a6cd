//! Command dispatch and handlers.
//!
//! Handlers render their result to a string; dispatch prints it. Library
//! errors are flattened to strings here.

pub mod at;
pub mod diff;
pub mod files;
pub mod hash;
pub mod init;
pub mod log;
pub mod show;
pub mod status;

use serde::Serialize;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::{Config, GitBinary};
use crate::context::ServiceContext;
use crate::repo::Repository;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// `Json` when `json` is set.
    #[must_use]
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Dispatch a parsed command to its handler.
///
/// Settings come from the environment and are overridden by `--repo` and
/// `--git`. When `REPOPROBE_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(Config::from_env().map_err(|e| e.to_string())?, cli)?;
    let repo_path = config.repo_path();

    let (ctx, session) = if let Some(dir) = config.record_dir.clone() {
        let (ctx, session) = ServiceContext::recording_at(dir, &repo_path, &config.git)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(&cli.command, &ctx, &config, Format::from_flag(cli.json));

    // Cassettes are written whether or not the command succeeded.
    if let Some(session) = session {
        // The recording adapters hold the recorders until the context goes.
        drop(ctx);
        finish_recording(session)?;
    }

    let text = result?;
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

/// Applies command-line overrides on top of environment settings.
fn resolve_config(mut config: Config, cli: &Cli) -> Result<Config, String> {
    if let Some(repo) = &cli.repo {
        config.repo = Some(repo.clone());
    }
    if let Some(git) = &cli.git {
        config.git = GitBinary::new(git.as_str()).map_err(|e| e.to_string())?;
    }
    Ok(config)
}

/// Dispatch a command with the given service context, returning the rendered output.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    format: Format,
) -> Result<String, String> {
    let repo = || Repository::new(ctx, config.repo_path()).with_binary(config.git.clone());
    match command {
        Command::Log { file, last, since } => log::run(&repo(), file, *last, *since, format),
        Command::Hash { file } => hash::run(&repo(), file, format),
        Command::Diff { file, from, to, header } => {
            diff::run(&repo(), file, from, to, *header, format)
        }
        Command::Show { commit, file } => show::run_file(&repo(), commit, file, format),
        Command::Object { hash } => show::run_object(&repo(), hash, format),
        Command::At { date, file } => at::run(&repo(), date, file.as_deref(), format),
        Command::Files { search, match_kind, tree } => {
            files::run(&repo(), search.as_deref(), (*match_kind).into(), *tree, format)
        }
        Command::Status => status::run(&repo(), format),
        Command::Init { directory, params } => {
            init::run(ctx, directory, params, &config.git, format)
        }
    }
}

/// Serializes `value` as pretty JSON.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {e}"))
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
