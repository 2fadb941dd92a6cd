//! `repoprobe init` command.

use std::path::Path;

use super::{to_json, Format};
use crate::config::GitBinary;
use crate::context::ServiceContext;
use crate::repo::Repository;

/// Execute the `init` command.
///
/// # Errors
///
/// Returns an error string if the directory already holds a repository,
/// cannot be created, or `git init` fails.
pub fn run(
    ctx: &ServiceContext,
    directory: &Path,
    params: &[String],
    binary: &GitBinary,
    format: Format,
) -> Result<String, String> {
    let output =
        Repository::init(ctx, directory, params, binary.as_str()).map_err(|e| e.to_string())?;
    match format {
        Format::Json => to_json(&output),
        Format::Text => Ok(output.text()),
    }
}
