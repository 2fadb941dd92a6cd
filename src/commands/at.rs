//! `repoprobe at` command.

use super::log::format_commit;
use super::{to_json, Format};
use crate::repo::Repository;

/// Execute the `at` command: the newest commit at or before `date`,
/// optionally restricted to `file`.
///
/// # Errors
///
/// Returns an error string if git cannot run or the log query fails.
pub fn run(
    repo: &Repository<'_>,
    date: &str,
    file: Option<&str>,
    format: Format,
) -> Result<String, String> {
    let commit = match file {
        Some(file) => repo.commit_at_date(file, date),
        None => repo.repo_commit_at_date(date),
    }
    .map_err(|e| e.to_string())?;

    match (format, commit) {
        (Format::Json, commit) => to_json(&commit),
        (Format::Text, Some(commit)) => Ok(format_commit(&commit)),
        (Format::Text, None) => Ok(format!("No commit at or before {date}.")),
    }
}
