//! Commit log lines.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::split_fields;

/// Separator between the fields of one log line.
pub const FIELD_DELIMITER: char = ';';

/// `--format` value producing `<hash>;<unix time>;<author>;<subject>`.
pub const COMMIT_FORMAT: &str = "%H;%ct;%an;%s";

/// One commit as printed by a log query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full hex commit hash.
    pub commit_id: String,
    /// Committer time in seconds since the epoch.
    pub timestamp: i64,
    /// Author name.
    pub author: String,
    /// Subject line, delimiters included.
    pub message: String,
}

impl CommitRecord {
    /// Parses one log line.
    ///
    /// Only the first three delimiters split; the message keeps the rest.
    /// Returns `None` for lines without a delimiter or with a non-numeric
    /// timestamp. Missing trailing fields are empty.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let fields = split_fields(line, FIELD_DELIMITER, 4)?;
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();

        let Ok(timestamp) = field(1).trim().parse::<i64>() else {
            warn!(line, "skipping log line with non-numeric timestamp");
            return None;
        };

        Some(Self {
            commit_id: field(0).to_string(),
            timestamp,
            author: field(2).to_string(),
            message: field(3).to_string(),
        })
    }
}

/// Parses log output into records, in output order.
///
/// Lines that are not records (blank lines, warnings merged into the
/// stream) are skipped.
pub fn parse_commit_lines<S: AsRef<str>>(lines: &[S]) -> Vec<CommitRecord> {
    lines.iter().filter_map(|line| CommitRecord::parse(line.as_ref())).collect()
}
