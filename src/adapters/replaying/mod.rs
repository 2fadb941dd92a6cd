//! Replaying adapters that serve recorded interactions.

pub mod filesystem;
pub mod runner;

pub use filesystem::ReplayingFileSystem;
pub use runner::ReplayingCommandRunner;

use std::sync::Mutex;

use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;

/// Take the output of the next recorded `port::method` interaction.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: Port,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Split a recorded `{"ok": v}` / `{"err": msg}` output.
///
/// Outputs with neither key are treated as a bare `ok` value.
pub(crate) fn replay_result(output: &serde_json::Value) -> Result<&serde_json::Value, String> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string());
    }
    Ok(output.get("ok").unwrap_or(output))
}
