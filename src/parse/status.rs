//! `git status` output.

/// Text git prints when run outside a working tree.
pub const NOT_A_REPOSITORY: &str = "not a git repository";

/// Returns `true` if any line reports that the directory is not a repository.
///
/// Every other output, including unrelated errors, counts as initialized.
pub fn is_not_a_repository<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().any(|line| line.as_ref().contains(NOT_A_REPOSITORY))
}
