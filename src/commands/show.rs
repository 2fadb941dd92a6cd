//! `repoprobe show` and `repoprobe object` commands.

use serde_json::json;

use super::{to_json, Format};
use crate::repo::Repository;

/// Execute the `show` command: a file's content at a revision.
///
/// # Errors
///
/// Returns an error string if git cannot run or does not know the
/// revision or path.
pub fn run_file(
    repo: &Repository<'_>,
    commit: &str,
    file: &str,
    format: Format,
) -> Result<String, String> {
    let content = repo.file_at_commit(file, commit).map_err(|e| e.to_string())?;
    match format {
        Format::Json => to_json(&json!({ "commit": commit, "file": file, "content": content })),
        Format::Text => Ok(content),
    }
}

/// Execute the `object` command: an object's content by hash.
///
/// # Errors
///
/// Returns an error string if git cannot run or does not know the object.
pub fn run_object(repo: &Repository<'_>, hash: &str, format: Format) -> Result<String, String> {
    let content = repo.object_content(hash).map_err(|e| e.to_string())?;
    match format {
        Format::Json => to_json(&json!({ "hash": hash, "content": content })),
        Format::Text => Ok(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::testing::{context, MemFs, ScriptedRunner};

    #[test]
    fn file_content_as_text_and_json() {
        let runner = ScriptedRunner::default();
        runner.push(0, &["fn main() {}", ""]);
        runner.push(0, &["fn main() {}"]);
        let ctx = context(&runner, &MemFs::default());
        let repo = Repository::new(&ctx, "/r");

        assert_eq!(run_file(&repo, "HEAD", "src/main.rs", Format::Text).unwrap(), "fn main() {}\n");

        let json = run_file(&repo, "HEAD", "src/main.rs", Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "src/main.rs");
        assert_eq!(value["content"], "fn main() {}");
    }

    #[test]
    fn missing_path_is_an_error() {
        let runner = ScriptedRunner::default();
        runner.push(128, &["fatal: path 'nope' does not exist in 'HEAD'"]);
        let ctx = context(&runner, &MemFs::default());

        let err = run_file(&Repository::new(&ctx, "/r"), "HEAD", "nope", Format::Text).unwrap_err();
        assert!(err.contains("does not exist in 'HEAD'"));
    }

    #[test]
    fn object_content_passes_hash_through() {
        let runner = ScriptedRunner::default();
        runner.push(0, &["hello"]);
        let ctx = context(&runner, &MemFs::default());

        let out = run_object(&Repository::new(&ctx, "/r"), "ce01362", Format::Text).unwrap();
        assert_eq!(out, "hello");
        assert_eq!(runner.last_argv(), ["git", "show", "ce01362"]);
    }
}
