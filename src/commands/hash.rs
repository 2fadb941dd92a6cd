//! `repoprobe hash` command.

use super::{to_json, Format};
use crate::repo::Repository;

/// Execute the `hash` command.
///
/// An untracked file is not an error: text output says so and JSON output
/// is `null`.
///
/// # Errors
///
/// Returns an error string if git cannot run.
pub fn run(repo: &Repository<'_>, file: &str, format: Format) -> Result<String, String> {
    let hash = repo.file_hash(file).map_err(|e| e.to_string())?;
    match (format, hash) {
        (Format::Json, hash) => to_json(&hash),
        (Format::Text, Some(hash)) => Ok(hash),
        (Format::Text, None) => Ok(format!("{file} is not tracked at HEAD.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::testing::{context, MemFs, ScriptedRunner};

    #[test]
    fn prints_hash_or_absence() {
        let runner = ScriptedRunner::default();
        runner.push(0, &["100644 blob 3b18e512dba79e4c8300dd08aeb37f8e728b8dad\ta.txt"]);
        runner.push(0, &[]);
        runner.push(0, &[]);
        let ctx = context(&runner, &MemFs::default());
        let repo = Repository::new(&ctx, "/r");

        let hash = run(&repo, "a.txt", Format::Text).unwrap();
        assert_eq!(hash, "3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
        assert_eq!(run(&repo, "b.txt", Format::Text).unwrap(), "b.txt is not tracked at HEAD.");
        assert_eq!(run(&repo, "b.txt", Format::Json).unwrap(), "null");
    }
}
