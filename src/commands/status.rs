//! `repoprobe status` command.

use serde::Serialize;

use super::{to_json, Format};
use crate::repo::Repository;

#[derive(Debug, Serialize)]
struct RepoState {
    path: String,
    initialized: bool,
    root_directory: bool,
}

/// Execute the `status` command.
///
/// Reports whether the path is inside an initialized repository and
/// whether it is the working-tree root.
///
/// # Errors
///
/// Returns an error string if git cannot run.
pub fn run(repo: &Repository<'_>, format: Format) -> Result<String, String> {
    let state = RepoState {
        path: repo.path().display().to_string(),
        initialized: repo.is_initialized().map_err(|e| e.to_string())?,
        root_directory: repo.is_root_directory(),
    };

    match format {
        Format::Json => to_json(&state),
        Format::Text => Ok(format!(
            "Path: {}\nInitialized: {}\nRoot directory: {}",
            state.path,
            yes_no(state.initialized),
            yes_no(state.root_directory)
        )),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
