//! Two-revision diff output for a single file.

use serde::Serialize;

use super::{join_lines, lines_from};

/// Number of header lines git prints before the first hunk of a plain
/// modification: `diff --git`, `index`, `---`, `+++`.
pub const DIFF_HEADER_LINES: usize = 4;

/// Result of extracting a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "lines", rename_all = "snake_case")]
pub enum DiffResult {
    /// Diff lines, with or without the header.
    Body(Vec<String>),
    /// The output did not look like a diff of the requested file.
    ///
    /// An empty diff (no changes) also lands here.
    Unavailable,
}

impl DiffResult {
    /// The body joined with `\n`, or `None` when unavailable.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Body(lines) => Some(join_lines(lines)),
            Self::Unavailable => None,
        }
    }

    /// Returns `true` for [`DiffResult::Body`].
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Body(_))
    }
}

/// Checks the `---`/`+++` header positions and slices out the diff body.
///
/// Lines 2 and 3 must both contain `filename`; this is a structural sanity
/// check on the header, not a parse of the diff format. With
/// `include_header` the full output is kept, otherwise the first
/// [`DIFF_HEADER_LINES`] lines are dropped.
pub fn parse_diff<S: AsRef<str>>(lines: &[S], filename: &str, include_header: bool) -> DiffResult {
    let names_file = |i: usize| lines.get(i).is_some_and(|l| l.as_ref().contains(filename));

    if lines.len() < DIFF_HEADER_LINES || !names_file(2) || !names_file(3) {
        return DiffResult::Unavailable;
    }

    let kept = if include_header { lines } else { lines_from(lines, DIFF_HEADER_LINES) };
    DiffResult::Body(kept.iter().map(|l| l.as_ref().to_string()).collect())
}
