//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LiveCommandRunner, LiveFileSystem};
use crate::adapters::recording::{RecordingCommandRunner, RecordingFileSystem};
use crate::adapters::replaying::{ReplayingCommandRunner, ReplayingFileSystem};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::GitBinary;
use crate::ports::filesystem::FileSystem;
use crate::ports::runner::{CommandRunner, RunOutput, RunnerError};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Executes the version-control binary.
    pub runner: Box<dyn CommandRunner>,
    /// Filesystem probes around repository roots.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self { runner: Box::new(LiveCommandRunner), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context from caller-supplied adapters.
    #[must_use]
    pub fn with(runner: Box<dyn CommandRunner>, fs: Box<dyn FileSystem>) -> Self {
        Self { runner, fs }
    }

    /// Creates a live context whose interactions are recorded to per-port
    /// cassettes in `dir`. `binary` reads the head commit the cassettes are
    /// stamped with.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(
        dir: PathBuf,
        repo: &Path,
        binary: &GitBinary,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir, repo, binary)?;
        let ctx = Self {
            runner: Box::new(RecordingCommandRunner::new(
                Box::new(LiveCommandRunner),
                Arc::clone(&session.runner),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so that
    /// per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::read_cassette(path)?;
        Ok(Self {
            runner: Box::new(ReplayingCommandRunner::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when
    /// called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            runner: match replayers.runner {
                Some(r) => Box::new(ReplayingCommandRunner::new(r)),
                None => Box::new(Unconfigured(Port::Runner)),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(Unconfigured(Port::Fs)),
            },
        })
    }
}

/// Stands in for a port that has no cassette during replay.
struct Unconfigured(Port);

impl Unconfigured {
    fn fail(&self, call: &str) -> ! {
        panic!(
            "{} port not configured in CassetteConfig (no cassette loaded for it), \
             attempted {call}",
            self.0
        );
    }
}

impl CommandRunner for Unconfigured {
    fn run(&self, _workdir: &Path, argv: &[String]) -> Result<RunOutput, RunnerError> {
        self.fail(&format!("run({argv:?})"))
    }
}

impl FileSystem for Unconfigured {
    fn is_dir(&self, path: &Path) -> bool {
        self.fail(&format!("is_dir({})", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        self.fail(&format!("create_dir_all({})", path.display()))
    }
}
