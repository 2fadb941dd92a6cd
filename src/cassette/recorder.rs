//! Records interactions into a cassette file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::format::{Cassette, Interaction, Port};

/// Collects interactions in memory and writes them as one YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    commit: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a recorder that will write to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            commit: commit.into(),
            interactions: Vec::new(),
        }
    }

    /// Create a recorder writing `<dir>/<port>.cassette.yaml`.
    pub fn for_port(dir: &Path, port: Port, name: impl Into<String>, commit: &str) -> Self {
        Self::new(dir.join(format!("{port}.cassette.yaml")), name, commit)
    }

    /// Appends an interaction and returns the sequence number it was given.
    pub fn record(
        &mut self,
        port: Port,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> u64 {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction { seq, port, method: method.into(), input, output });
        seq
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Writes the cassette, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let count = self.interactions.len();
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            commit: self.commit,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        debug!(path = %self.path.display(), count, "wrote cassette");
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_finish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runner.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "status-check", "deadbeef");
        assert!(recorder.is_empty());
        let first = recorder.record(
            Port::Runner,
            "run",
            json!({"argv": ["git", "status"]}),
            json!({"ok": {"lines": ["On branch main"], "exit_code": 0}}),
        );
        recorder.record(Port::Fs, "is_dir", json!({"path": "/repo/.git"}), json!(true));
        let last = recorder.record(
            Port::Runner,
            "run",
            json!({"argv": ["git", "ls-files"]}),
            json!({"ok": {"lines": ["README.md"], "exit_code": 0}}),
        );
        assert_eq!((first, last), (0, 2));
        assert_eq!(recorder.len(), 3);

        let result_path = recorder.finish().expect("finish should succeed");
        assert_eq!(result_path, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();

        assert_eq!(cassette.name, "status-check");
        assert_eq!(cassette.commit, "deadbeef");
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(cassette.interactions[1].port, Port::Fs);
        assert_eq!(cassette.interactions[2].input, json!({"argv": ["git", "ls-files"]}));
    }

    #[test]
    fn per_port_file_name_and_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");

        let recorder = CassetteRecorder::for_port(&nested, Port::Fs, "probe", "abc");
        let written = recorder.finish().unwrap();
        assert_eq!(written, nested.join("fs.cassette.yaml"));
        assert!(written.is_file());
    }
}
