//! Repository facade behavior against recorded git output.

use std::path::{Path, PathBuf};

use serde_json::json;

use repoprobe::cassette::config::CassetteConfig;
use repoprobe::{DiffResult, LogOptions, RepoError, Repository, SearchKind, ServiceContext};

const HEAD: &str = "9fceb02d0ae598e95dc970b74767f19372d61af8";
const ROOT: &str = "e83c5163316f89bfbde7d9ab23ca2e25604af290";

fn cassette(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cassettes").join(name)
}

#[test]
fn walkthrough_replays_every_query() {
    let ctx = ServiceContext::replaying(&cassette("repository.cassette.yaml")).unwrap();
    let repo = Repository::new(&ctx, "/work/demo");

    assert!(repo.is_initialized().unwrap());
    assert!(repo.is_root_directory());

    let history = repo.commit_history("README.md", LogOptions::default()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].commit_id, HEAD);
    assert_eq!(history[0].author, "Ada Lovelace");
    assert_eq!(history[0].message, "docs: usage; examples");
    assert_eq!(history[1].timestamp, 1_742_048_000);

    assert_eq!(
        repo.file_hash("README.md").unwrap().as_deref(),
        Some("5716ca5987cbf97d6bb54920bea6adde242d87e6")
    );
    assert_eq!(repo.file_hash("notes.txt").unwrap(), None);

    let diff = repo.diff("README.md", ROOT, HEAD, false).unwrap();
    assert_eq!(
        diff,
        DiffResult::Body(vec![
            "@@ -1 +1,2 @@".into(),
            " # demo".into(),
            "+See `demo --help`.".into()
        ])
    );

    assert_eq!(repo.file_at_commit("README.md", ROOT).unwrap(), "# demo");

    let at = repo.commit_at_date("README.md", "2025-03-15 14:00:00").unwrap().unwrap();
    assert_eq!(at.commit_id, ROOT);
    assert_eq!(at.message, "initial commit");

    let tree = repo.file_tree().unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            ".": ["Cargo.toml", "README.md"],
            "src": {".": ["main.rs"], "cli": {".": ["args.rs", "mod.rs"]}},
            "tests": {".": ["cli.rs"]}
        })
    );

    let cli_files = repo.list_files_filtered("cli", SearchKind::Substring).unwrap();
    assert_eq!(cli_files, ["src/cli/args.rs", "src/cli/mod.rs", "tests/cli.rs"]);

    let err = repo.object_content("0000000000000000000000000000000000000000").unwrap_err();
    assert!(matches!(err, RepoError::CommandFailed { exit_code: 128, .. }));
}

#[test]
fn uninitialized_directory_from_runner_only_cassette() {
    let config = CassetteConfig {
        runner: Some(cassette("uninitialized.runner.cassette.yaml")),
        ..CassetteConfig::panic_on_unspecified()
    };
    let ctx = ServiceContext::replaying_from(&config).unwrap();
    let repo = Repository::new(&ctx, "/tmp/plain");

    assert!(!repo.is_initialized().unwrap());
    assert_eq!(repo.file_hash("README.md").unwrap(), None);

    let err = repo.commit_history("README.md", LogOptions::default()).unwrap_err();
    assert!(matches!(err, RepoError::Runner(_)));
    assert!(err.to_string().contains("No such file or directory"));
}

#[test]
#[should_panic(expected = "not configured in CassetteConfig")]
fn unconfigured_port_panics_with_a_clear_message() {
    let config = CassetteConfig {
        runner: Some(cassette("uninitialized.runner.cassette.yaml")),
        ..CassetteConfig::panic_on_unspecified()
    };
    let ctx = ServiceContext::replaying_from(&config).unwrap();
    let _ = Repository::new(&ctx, "/tmp/plain").is_root_directory();
}

#[test]
fn replay_is_deterministic() {
    let path = cassette("repository.cassette.yaml");
    let run = || {
        let ctx = ServiceContext::replaying(&path).unwrap();
        let repo = Repository::new(&ctx, "/work/demo");
        let _ = repo.is_initialized().unwrap();
        repo.commit_history("README.md", LogOptions::default()).unwrap()
    };
    assert_eq!(run(), run());
}
