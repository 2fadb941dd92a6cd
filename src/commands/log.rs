//! `repoprobe log` command.

use chrono::DateTime;

use super::{to_json, Format};
use crate::parse::CommitRecord;
use crate::repo::{LogOptions, Repository};

/// Execute the `log` command.
///
/// # Errors
///
/// Returns an error string if git cannot run or the log query fails.
pub fn run(
    repo: &Repository<'_>,
    file: &str,
    last: bool,
    since: Option<i64>,
    format: Format,
) -> Result<String, String> {
    let options = LogOptions { last_only: last, since };
    let commits = repo.commit_history(file, options).map_err(|e| e.to_string())?;

    match format {
        Format::Json => to_json(&commits),
        Format::Text if commits.is_empty() => Ok(format!("No commits touch {file}.")),
        Format::Text => Ok(commits.iter().map(format_commit).collect::<Vec<_>>().join("\n")),
    }
}

/// One commit as `<short id> <date> <author>: <message>`.
pub(crate) fn format_commit(commit: &CommitRecord) -> String {
    let short: String = commit.commit_id.chars().take(10).collect();
    let when = DateTime::from_timestamp(commit.timestamp, 0).map_or_else(
        || commit.timestamp.to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    format!("{short} {when} {}: {}", commit.author, commit.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::testing::{context, MemFs, ScriptedRunner};

    #[test]
    fn text_lists_one_line_per_commit() {
        let runner = ScriptedRunner::default();
        runner.push(
            0,
            &[
                "9fceb02d0ae598e95dc970b74767f19372d61af8;1700000100;Ann;second; with delimiter",
                "e83c5163316f89bfbde7d9ab23ca2e25604af290;1700000000;Bob;first",
            ],
        );
        let ctx = context(&runner, &MemFs::default());
        let repo = Repository::new(&ctx, "/r");

        let out = run(&repo, "a.txt", false, None, Format::Text).unwrap();
        assert_eq!(
            out,
            "9fceb02d0a 2023-11-14 22:15:00 Ann: second; with delimiter\n\
             e83c516331 2023-11-14 22:13:20 Bob: first"
        );
    }

    #[test]
    fn json_is_an_array_of_records() {
        let runner = ScriptedRunner::default();
        runner.push(0, &["abc;42;Ann;msg"]);
        let ctx = context(&runner, &MemFs::default());

        let out = run(&Repository::new(&ctx, "/r"), "a.txt", true, Some(7), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["commit_id"], "abc");
        assert_eq!(value[0]["timestamp"], 42);
        assert!(runner.last_argv().contains(&"--since=@7".to_string()));
    }

    #[test]
    fn empty_history_says_so() {
        let runner = ScriptedRunner::default();
        runner.push(0, &[]);
        let ctx = context(&runner, &MemFs::default());

        let out = run(&Repository::new(&ctx, "/r"), "new.txt", false, None, Format::Text).unwrap();
        assert_eq!(out, "No commits touch new.txt.");
    }

    #[test]
    fn failure_is_flattened_to_a_string() {
        let runner = ScriptedRunner::default();
        runner.push(128, &["fatal: not a git repository (or any of the parent directories): .git"]);
        let ctx = context(&runner, &MemFs::default());

        let repo = Repository::new(&ctx, "/r");
        let err = run(&repo, "a.txt", false, None, Format::Text).unwrap_err();
        assert!(err.contains("exited with status 128"));
    }
}
