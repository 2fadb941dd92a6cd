//! Replaying adapter for the `CommandRunner` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CommandRunner, RunOutput, RunnerError};

/// Replays recorded command output from a cassette.
///
/// The requested argv is not compared against the recording; interactions
/// are served strictly in order.
pub struct ReplayingCommandRunner {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingCommandRunner {
    /// Creates a new replaying runner from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl CommandRunner for ReplayingCommandRunner {
    fn run(&self, _workdir: &Path, _argv: &[String]) -> Result<RunOutput, RunnerError> {
        let output = next_output(&self.replayer, Port::Runner, "run");
        let value = replay_result(&output).map_err(RunnerError::Replayed)?;
        serde_json::from_value(value.clone())
            .map_err(|e| RunnerError::Replayed(format!("runner::run: failed to deserialize: {e}")))
    }
}
