//! `repoprobe diff` command.

use super::{to_json, Format};
use crate::parse::DiffResult;
use crate::repo::Repository;

/// Execute the `diff` command.
///
/// # Errors
///
/// Returns an error string if git cannot run.
pub fn run(
    repo: &Repository<'_>,
    file: &str,
    from: &str,
    to: &str,
    header: bool,
    format: Format,
) -> Result<String, String> {
    let diff = repo.diff(file, from, to, header).map_err(|e| e.to_string())?;
    match (format, &diff) {
        (Format::Json, _) => to_json(&diff),
        (Format::Text, DiffResult::Body(lines)) => Ok(lines.join("\n")),
        (Format::Text, DiffResult::Unavailable) => {
            Ok(format!("No diff available for {file} between {from} and {to}."))
        }
    }
}
