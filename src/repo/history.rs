//! Log and diff queries.

use tracing::debug;

use super::Repository;
use crate::error::RepoError;
use crate::parse::{parse_commit_lines, parse_diff, CommitRecord, DiffResult, COMMIT_FORMAT};

/// Narrows a commit history query.
///
/// Both options shape the `git log` argument vector; results are never
/// filtered after the fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Only fetch the newest commit (`-n 1`).
    pub last_only: bool,
    /// Only commits newer than this Unix timestamp (`--since=@<seconds>`).
    pub since: Option<i64>,
}

impl LogOptions {
    /// Only the newest commit.
    #[must_use]
    pub fn last() -> Self {
        Self { last_only: true, since: None }
    }

    /// Commits after `seconds`.
    #[must_use]
    pub fn since(mut self, seconds: i64) -> Self {
        self.since = Some(seconds);
        self
    }

    fn args(self) -> Vec<String> {
        let mut args = vec!["log".to_string()];
        if self.last_only {
            args.extend(["-n".to_string(), "1".to_string()]);
        }
        args.push(format!("--format={COMMIT_FORMAT}"));
        if let Some(seconds) = self.since {
            args.push(format!("--since=@{seconds}"));
        }
        args
    }
}

impl Repository<'_> {
    /// Commits touching `filename`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero.
    pub fn commit_history(
        &self,
        filename: &str,
        options: LogOptions,
    ) -> Result<Vec<CommitRecord>, RepoError> {
        let mut args = options.args();
        args.extend(["--".to_string(), filename.to_string()]);

        let output = self.run_checked(args)?;
        let commits = parse_commit_lines(&output.lines);
        debug!(filename, count = commits.len(), "parsed commit history");
        Ok(commits)
    }

    /// Diff of `filename` between two revisions.
    ///
    /// Without `include_header` the four header lines are dropped. A
    /// non-zero exit, an unchanged file and a header that does not name
    /// `filename` all give [`DiffResult::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns an error only if git cannot run.
    pub fn diff(
        &self,
        filename: &str,
        from: &str,
        to: &str,
        include_header: bool,
    ) -> Result<DiffResult, RepoError> {
        let output = self.run(["diff", from, to, "--", filename])?;
        if !output.success() {
            debug!(filename, exit_code = output.exit_code, "diff exited non-zero");
            return Ok(DiffResult::Unavailable);
        }
        Ok(parse_diff(&output.lines, filename, include_header))
    }

    /// Newest commit touching `filename` at or before `date`.
    ///
    /// `date` is passed to `--until` unchanged, so any format git accepts
    /// works (`2024-01-31`, `@1706659200`, `yesterday`).
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero.
    pub fn commit_at_date(
        &self,
        filename: &str,
        date: &str,
    ) -> Result<Option<CommitRecord>, RepoError> {
        self.latest_until(date, Some(filename))
    }

    /// Newest commit of the whole repository at or before `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero.
    pub fn repo_commit_at_date(&self, date: &str) -> Result<Option<CommitRecord>, RepoError> {
        self.latest_until(date, None)
    }

    fn latest_until(
        &self,
        date: &str,
        filename: Option<&str>,
    ) -> Result<Option<CommitRecord>, RepoError> {
        let mut args = vec![
            "log".to_string(),
            "-1".to_string(),
            format!("--format={COMMIT_FORMAT}"),
            format!("--until={date}"),
        ];
        if let Some(filename) = filename {
            args.extend(["--".to_string(), filename.to_string()]);
        }

        let output = self.run_checked(args)?;
        Ok(parse_commit_lines(&output.lines).into_iter().next())
    }
}
