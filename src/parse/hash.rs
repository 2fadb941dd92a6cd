//! Tree listing lines (`git ls-tree`).

use std::sync::LazyLock;

use regex::Regex;

/// `<mode> <type> <hash>\t<path>`
static LS_TREE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<mode>\d+) (?P<kind>\S+) (?P<hash>[0-9a-f]+)\t(?P<path>.*)$")
        .expect("ls-tree pattern is valid")
});

/// Extracts the object hash from the first line of a one-path tree listing.
///
/// Empty output, or a first line of any other shape, means the path was
/// not found.
pub fn parse_file_hash<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    let first = lines.first()?;
    LS_TREE_LINE.captures(first.as_ref()).map(|caps| caps["hash"].to_string())
}
