//! Tracked files: listings, hashes and content.

use tracing::debug;

use super::Repository;
use crate::error::RepoError;
use crate::parse::{join_lines, parse_file_hash};
use crate::search::{FileSearch, SearchKind};
use crate::tree::PathTree;

impl Repository<'_> {
    /// Object hash of `filename` at `HEAD`, or `None` if it is not tracked there.
    ///
    /// # Errors
    ///
    /// Returns an error only if git cannot run; a non-zero exit (no `HEAD`
    /// yet, say) is reported as `None`.
    pub fn file_hash(&self, filename: &str) -> Result<Option<String>, RepoError> {
        let output = self.run(["ls-tree", "HEAD", filename])?;
        if !output.success() {
            debug!(filename, exit_code = output.exit_code, "ls-tree exited non-zero");
            return Ok(None);
        }
        Ok(parse_file_hash(&output.lines))
    }

    /// Content of `filename` as of `commit`, lines joined with `\n`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero (unknown
    /// revision or path).
    pub fn file_at_commit(&self, filename: &str, commit: &str) -> Result<String, RepoError> {
        let output = self.run_checked(["show".to_string(), format!("{commit}:{filename}")])?;
        Ok(join_lines(&output.lines))
    }

    /// Content of the object `hash`, lines joined with `\n`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero.
    pub fn object_content(&self, hash: &str) -> Result<String, RepoError> {
        let output = self.run_checked(["show", hash])?;
        Ok(join_lines(&output.lines))
    }

    /// Every tracked path, in `git ls-files` order.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot run or exits non-zero.
    pub fn list_all_files(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.run_checked(["ls-files"])?.lines)
    }

    /// Every tracked path folded into a [`PathTree`].
    ///
    /// # Errors
    ///
    /// See [`Repository::list_all_files`].
    pub fn file_tree(&self) -> Result<PathTree, RepoError> {
        Ok(PathTree::build(self.list_all_files()?))
    }

    /// Tracked paths matching `search` of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::InvalidPattern`] for a bad regular expression,
    /// before any command runs, or an error from [`Repository::list_all_files`].
    pub fn list_files_filtered(
        &self,
        search: &str,
        kind: SearchKind,
    ) -> Result<Vec<String>, RepoError> {
        let search = FileSearch::new(search, kind)?;
        self.list_files_matching(&search)
    }

    /// Tracked paths accepted by an already compiled search.
    ///
    /// # Errors
    ///
    /// See [`Repository::list_all_files`].
    pub fn list_files_matching(&self, search: &FileSearch) -> Result<Vec<String>, RepoError> {
        let all = self.list_all_files()?;
        let total = all.len();
        let kept = search.filter(all);
        debug!(total, kept = kept.len(), "filtered file listing");
        Ok(kept)
    }

    /// Matching paths folded into a [`PathTree`].
    ///
    /// # Errors
    ///
    /// See [`Repository::list_files_filtered`].
    pub fn file_tree_filtered(
        &self,
        search: &str,
        kind: SearchKind,
    ) -> Result<PathTree, RepoError> {
        Ok(PathTree::build(self.list_files_filtered(search, kind)?))
    }
}
