//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod runner;

pub use filesystem::RecordingFileSystem;
pub use runner::RecordingCommandRunner;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

use crate::cassette::format::Port;
use crate::cassette::recorder::CassetteRecorder;

fn to_json<T: Serialize>(value: &T, what: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "failed to serialize recording {what}");
        serde_json::Value::Null
    })
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    match recorder.lock() {
        Ok(mut guard) => {
            guard.record(port, method, input, output);
        }
        Err(_) => warn!(%port, method, "recorder lock poisoned, interaction dropped"),
    }
}

/// Record an interaction with a simple (non-Result) return value.
///
/// Mirror of the replaying adapters' plain output handling.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    push(recorder, port, method, to_json(input, "input"), to_json(output, "output"));
}

/// Record a `Result<T, E>` interaction.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::json!({ "ok": to_json(v, "output") }),
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };
    push(recorder, port, method, to_json(input, "input"), output);
}
