//! `repoprobe files` command.

use super::{to_json, Format};
use crate::repo::Repository;
use crate::search::SearchKind;
use crate::tree::PathTree;

/// Execute the `files` command.
///
/// Without `search` every tracked path is listed. With `tree` the paths are
/// folded into a directory hierarchy.
///
/// # Errors
///
/// Returns an error string if the search pattern is invalid or git fails.
pub fn run(
    repo: &Repository<'_>,
    search: Option<&str>,
    kind: SearchKind,
    tree: bool,
    format: Format,
) -> Result<String, String> {
    let paths = match search {
        Some(search) => repo.list_files_filtered(search, kind),
        None => repo.list_all_files(),
    }
    .map_err(|e| e.to_string())?;

    if tree {
        let tree = PathTree::build(&paths);
        return match format {
            Format::Json => to_json(&tree),
            Format::Text => Ok(tree.to_string().trim_end().to_string()),
        };
    }

    match format {
        Format::Json => to_json(&paths),
        Format::Text => Ok(paths.join("\n")),
    }
}
