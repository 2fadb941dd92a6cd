//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use super::format::Port;
use super::recorder::CassetteRecorder;
use crate::adapters::live::LiveCommandRunner;
use crate::config::GitBinary;
use crate::ports::CommandRunner;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file in
/// the session's output directory.
pub struct RecordingSession {
    /// Recorder for command runner interactions.
    pub runner: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a recording session writing into `output_dir`.
    ///
    /// `repo` is the probed repository; its head commit, read with `binary`,
    /// is stamped on every cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn at(output_dir: PathBuf, repo: &Path, binary: &GitBinary) -> Result<Self, String> {
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let commit = head_commit(&LiveCommandRunner, repo, binary);

        let make_recorder = |port: Port| {
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::for_port(&output_dir, port, name, &commit)))
        };

        Ok(Self { runner: make_recorder(Port::Runner), fs: make_recorder(Port::Fs), output_dir })
    }

    /// The directory cassette files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: Port) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.runner, Port::Runner)?;
        finish_one(self.fs, Port::Fs)?;

        Ok(self.output_dir)
    }
}

/// Stamp used when the head commit cannot be read.
const UNKNOWN_COMMIT: &str = "unknown";

/// Head commit of `repo`, or [`UNKNOWN_COMMIT`] when it cannot be read.
fn head_commit(runner: &dyn CommandRunner, repo: &Path, binary: &GitBinary) -> String {
    let argv = [binary.as_str(), "rev-parse", "HEAD"].map(String::from);
    let hash = runner
        .run(repo, &argv)
        .ok()
        .filter(|output| output.success())
        .and_then(|output| output.lines.first().map(|line| line.trim().to_string()))
        .filter(|line| !line.is_empty());

    hash.unwrap_or_else(|| {
        warn!(repo = %repo.display(), "could not read head commit, stamping cassettes 'unknown'");
        UNKNOWN_COMMIT.to_string()
    })
}
