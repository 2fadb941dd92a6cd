//! Repository facade: typed queries over git's text output.
//!
//! A [`Repository`] builds an argument vector, hands it to the context's
//! [`CommandRunner`](crate::ports::CommandRunner), and feeds the captured
//! lines to a parser from [`crate::parse`] or to [`crate::tree::PathTree`].
//! It holds no state besides the repository path and the configured binary;
//! every answer reflects the repository at the moment the command ran.

mod files;
mod history;

pub use history::LogOptions;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GitBinary;
use crate::context::ServiceContext;
use crate::error::{ConfigError, InitError, RepoError};
use crate::parse::is_not_a_repository;
use crate::ports::RunOutput;

/// Name of the control directory marking a working-tree root.
pub const CONTROL_DIR: &str = ".git";

/// Typed access to one repository through the git command-line tool.
///
/// All process execution and filesystem probing goes through `ctx`, so a
/// repository works with live, recording and replaying adapters alike.
pub struct Repository<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
    binary: GitBinary,
}

impl<'a> Repository<'a> {
    /// Opens the repository at `path` with the default `git` binary.
    ///
    /// Nothing is checked here; see [`Repository::is_initialized`].
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: impl Into<PathBuf>) -> Self {
        Self { ctx, path: path.into(), binary: GitBinary::default() }
    }

    /// Replaces the binary.
    #[must_use]
    pub fn with_binary(mut self, binary: GitBinary) -> Self {
        self.binary = binary;
        self
    }

    /// Validates and sets the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBinary`] if `binary` contains `;`; the
    /// previous binary stays in effect.
    pub fn set_binary(&mut self, binary: &str) -> Result<(), ConfigError> {
        self.binary = GitBinary::new(binary)?;
        Ok(())
    }

    /// The configured binary.
    #[must_use]
    pub fn binary(&self) -> &GitBinary {
        &self.binary
    }

    /// The repository path commands run in.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `false` if `git status` reports that the path is not a repository.
    ///
    /// Any other output, including unrelated errors and non-zero exits,
    /// counts as initialized.
    ///
    /// # Errors
    ///
    /// Returns an error only if the binary cannot be executed.
    pub fn is_initialized(&self) -> Result<bool, RepoError> {
        let output = self.run(["status"])?;
        Ok(!is_not_a_repository(&output.lines))
    }

    /// Returns `true` if the control directory sits directly under the
    /// repository path. Runs no command.
    #[must_use]
    pub fn is_root_directory(&self) -> bool {
        self.ctx.fs.is_dir(&self.path.join(CONTROL_DIR))
    }

    /// Creates a repository in `directory` with `<binary> init <params...>`.
    ///
    /// The directory and its parents are created when missing.
    ///
    /// # Errors
    ///
    /// - [`InitError::Config`] if `binary` contains `;`
    /// - [`InitError::AlreadyExists`] if `directory` already has a control directory
    /// - [`InitError::DirectoryCreateFailed`] if the directory cannot be created
    /// - [`InitError::Runner`] if the binary cannot be executed
    /// - [`InitError::ToolInitFailed`] if init exits non-zero
    pub fn init(
        ctx: &ServiceContext,
        directory: &Path,
        params: &[String],
        binary: &str,
    ) -> Result<RunOutput, InitError> {
        let binary = GitBinary::new(binary)?;

        if ctx.fs.is_dir(&directory.join(CONTROL_DIR)) {
            return Err(InitError::AlreadyExists { path: directory.to_path_buf() });
        }

        if !ctx.fs.is_dir(directory) {
            ctx.fs.create_dir_all(directory).map_err(|source| {
                InitError::DirectoryCreateFailed { path: directory.to_path_buf(), source }
            })?;
        }

        let mut argv = vec![binary.as_str().to_string(), "init".to_string()];
        argv.extend(params.iter().cloned());
        debug!(?argv, directory = %directory.display(), "initializing repository");

        let output = ctx.runner.run(directory, &argv)?;
        if !output.success() {
            return Err(InitError::ToolInitFailed {
                path: directory.to_path_buf(),
                exit_code: output.exit_code,
                output: output.lines,
            });
        }

        info!(directory = %directory.display(), "initialized repository");
        Ok(output)
    }

    fn argv<I, S>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        std::iter::once(self.binary.as_str().to_string())
            .chain(args.into_iter().map(Into::into))
            .collect()
    }

    /// Runs a command and returns its output whatever the exit code.
    fn run<I, S>(&self, args: I) -> Result<RunOutput, RepoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv = self.argv(args);
        debug!(?argv, repo = %self.path.display(), "running git");
        Ok(self.ctx.runner.run(&self.path, &argv)?)
    }

    /// Runs a command and treats a non-zero exit as [`RepoError::CommandFailed`].
    fn run_checked<I, S>(&self, args: I) -> Result<RunOutput, RepoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv = self.argv(args);
        debug!(?argv, repo = %self.path.display(), "running git");
        let output = self.ctx.runner.run(&self.path, &argv)?;
        if !output.success() {
            return Err(RepoError::CommandFailed {
                command: argv.join(" "),
                exit_code: output.exit_code,
                output: output.lines,
            });
        }
        Ok(output)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{context, MemFs, ScriptedRunner};
    use super::*;
    use crate::ports::FileSystem;

    #[test]
    fn status_not_a_repository_means_uninitialized() {
        let runner = ScriptedRunner::default();
        runner.push(128, &["fatal: not a git repository (or any of the parent directories): .git"]);
        let ctx = context(&runner, &MemFs::default());
        let repo = Repository::new(&ctx, "/work");

        assert!(!repo.is_initialized().unwrap());
        assert_eq!(runner.last_argv(), ["git", "status"]);
        assert_eq!(runner.calls.lock().unwrap()[0].0, PathBuf::from("/work"));
    }

    #[test]
    fn unrelated_status_errors_still_count_as_initialized() {
        let runner = ScriptedRunner::default();
        runner.push(128, &["fatal: detected dubious ownership in repository at '/work'"]);
        runner.push(0, &["On branch main"]);
        let ctx = context(&runner, &MemFs::default());
        let repo = Repository::new(&ctx, "/work");

        assert!(repo.is_initialized().unwrap());
        assert!(repo.is_initialized().unwrap());
    }

    #[test]
    fn status_spawn_failure_is_an_error() {
        let runner = ScriptedRunner::default();
        runner.push_err("failed to execute git: No such file or directory (os error 2)");
        let ctx = context(&runner, &MemFs::default());

        let err = Repository::new(&ctx, "/work").is_initialized().unwrap_err();
        assert!(matches!(err, RepoError::Runner(_)));
    }

    #[test]
    fn root_directory_checks_control_dir_without_running() {
        let runner = ScriptedRunner::default();
        let fs = MemFs::with_dirs(&["/work/.git"]);
        let ctx = context(&runner, &fs);

        assert!(Repository::new(&ctx, "/work").is_root_directory());
        assert!(!Repository::new(&ctx, "/work/sub").is_root_directory());
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn rejected_binary_keeps_previous_value() {
        let runner = ScriptedRunner::default();
        runner.push(0, &[]);
        let ctx = context(&runner, &MemFs::default());
        let mut repo = Repository::new(&ctx, "/work");

        repo.set_binary("/opt/git/bin/git").unwrap();
        let err = repo.set_binary("git; rm -rf ~").unwrap_err();
        assert_eq!(err, ConfigError::InvalidBinary("git; rm -rf ~".into()));
        assert_eq!(repo.binary().as_str(), "/opt/git/bin/git");

        repo.is_initialized().unwrap();
        assert_eq!(runner.last_argv()[0], "/opt/git/bin/git");
    }

    #[test]
    fn init_creates_missing_directory_and_runs_init() {
        let runner = ScriptedRunner::default();
        runner.push(0, &["Initialized empty Git repository in /srv/new/.git/"]);
        let fs = MemFs::default();
        let ctx = context(&runner, &fs);

        let params = vec!["--initial-branch=main".to_string()];
        let output = Repository::init(&ctx, Path::new("/srv/new"), &params, "git").unwrap();

        assert!(output.success());
        assert!(output.lines[0].starts_with("Initialized empty Git repository"));
        assert!(fs.is_dir(Path::new("/srv/new")));
        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0].0, PathBuf::from("/srv/new"));
        assert_eq!(calls[0].1, ["git", "init", "--initial-branch=main"]);
    }

    #[test]
    fn init_refuses_existing_repository() {
        let runner = ScriptedRunner::default();
        let ctx = context(&runner, &MemFs::with_dirs(&["/srv/repo", "/srv/repo/.git"]));

        let err = Repository::init(&ctx, Path::new("/srv/repo"), &[], "git").unwrap_err();
        assert!(
            matches!(err, InitError::AlreadyExists { ref path } if path == Path::new("/srv/repo"))
        );
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn init_reports_directory_creation_failure() {
        let runner = ScriptedRunner::default();
        let fs = MemFs { fail_create: true, ..MemFs::default() };
        let ctx = context(&runner, &fs);

        let err = Repository::init(&ctx, Path::new("/root/locked"), &[], "git").unwrap_err();
        assert!(matches!(err, InitError::DirectoryCreateFailed { .. }));
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn init_reports_non_zero_exit() {
        let runner = ScriptedRunner::default();
        runner.push(128, &["fatal: cannot mkdir .git: Permission denied"]);
        let ctx = context(&runner, &MemFs::with_dirs(&["/srv/ro"]));

        let err = Repository::init(&ctx, Path::new("/srv/ro"), &[], "git").unwrap_err();
        match err {
            InitError::ToolInitFailed { exit_code, output, .. } => {
                assert_eq!(exit_code, 128);
                assert_eq!(output.len(), 1);
            }
            other => panic!("expected ToolInitFailed, got {other:?}"),
        }
    }

    #[test]
    fn init_rejects_binary_with_separator() {
        let runner = ScriptedRunner::default();
        let ctx = context(&runner, &MemFs::default());

        let err = Repository::init(&ctx, Path::new("/srv/x"), &[], "git;id").unwrap_err();
        assert!(matches!(err, InitError::Config(_)));
        assert_eq!(runner.call_count(), 0);
    }
}
