//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn is_dir(&self, _path: &Path) -> bool {
        next_output(&self.replayer, Port::Fs, "is_dir")
            .as_bool()
            .expect("fs::is_dir: expected boolean output")
    }

    fn create_dir_all(&self, _path: &Path) -> std::io::Result<()> {
        let output = next_output(&self.replayer, Port::Fs, "create_dir_all");
        replay_result(&output).map(|_| ()).map_err(std::io::Error::other)
    }
}
