//! Recording adapter for the `CommandRunner` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::format::Port;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CommandRunner, RunOutput, RunnerError};

/// Records command executions while delegating to an inner runner.
pub struct RecordingCommandRunner {
    inner: Box<dyn CommandRunner>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCommandRunner {
    /// Creates a new recording runner wrapping the given implementation.
    pub fn new(inner: Box<dyn CommandRunner>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RunInput<'a> {
    workdir: String,
    argv: &'a [String],
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, workdir: &Path, argv: &[String]) -> Result<RunOutput, RunnerError> {
        let result = self.inner.run(workdir, argv);
        let input = RunInput { workdir: workdir.display().to_string(), argv };
        record_result(&self.recorder, Port::Runner, "run", &input, &result);
        result
    }
}
