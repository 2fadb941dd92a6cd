//! Parsers for git's line-oriented output.
//!
//! Every function here is pure: it takes the captured lines of one command
//! and returns a typed result or a "no match" value. None of them fail.

pub mod commit;
pub mod diff;
pub mod hash;
pub mod status;

pub use commit::{parse_commit_lines, CommitRecord, COMMIT_FORMAT, FIELD_DELIMITER};
pub use diff::{parse_diff, DiffResult, DIFF_HEADER_LINES};
pub use hash::parse_file_hash;
pub use status::is_not_a_repository;

/// Splits `line` on `delimiter` into at most `limit` fields.
///
/// The last field keeps any further delimiters verbatim. Returns `None` when
/// the delimiter does not occur at all.
pub fn split_fields(line: &str, delimiter: char, limit: usize) -> Option<Vec<&str>> {
    line.contains(delimiter).then(|| line.splitn(limit, delimiter).collect())
}

/// Lines from index `start` on, or an empty slice past the end.
pub fn lines_from<S>(lines: &[S], start: usize) -> &[S] {
    lines.get(start..).unwrap_or(&[])
}

/// Joins lines with `\n`, no trailing newline.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_remainder_verbatim() {
        assert_eq!(split_fields("a;b;c;d;e;f", ';', 4), Some(vec!["a", "b", "c", "d;e;f"]));
    }

    #[test]
    fn split_without_delimiter_is_none() {
        assert_eq!(split_fields("warning: something", ';', 4), None);
        assert_eq!(split_fields("", ';', 4), None);
    }

    #[test]
    fn split_with_fewer_fields_than_limit() {
        assert_eq!(split_fields("a;", ';', 4), Some(vec!["a", ""]));
    }

    #[test]
    fn lines_from_past_the_end_is_empty() {
        let lines = ["a", "b"];
        assert_eq!(lines_from(&lines, 1), ["b"]);
        assert!(lines_from(&lines, 2).is_empty());
        assert!(lines_from(&lines, 9).is_empty());
    }

    #[test]
    fn join_has_no_trailing_newline() {
        assert_eq!(join_lines(&["a", "", "b"]), "a\n\nb");
        assert_eq!(join_lines::<&str>(&[]), "");
    }
}
