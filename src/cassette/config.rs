//! Which cassette file backs which port during replay.

use std::path::{Path, PathBuf};

use super::format::{Cassette, Port};
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. A port left at `None` panics when called
/// during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the command runner.
    pub runner: Option<PathBuf>,
    /// Cassette for filesystem probes.
    pub fs: Option<PathBuf>,
}

/// One replayer per configured port.
pub struct PortReplayers {
    /// Replayer for the command runner.
    pub runner: Option<CassetteReplayer>,
    /// Replayer for filesystem probes.
    pub fs: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// A config with no cassette for any port.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Picks up the `<port>.cassette.yaml` files a recording session left
    /// in `dir`. Missing files leave their port unconfigured.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |port: Port| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.is_file().then_some(path)
        };
        Self { runner: existing(Port::Runner), fs: existing(Port::Fs) }
    }

    /// The cassette configured for `port`, if any.
    #[must_use]
    pub fn path(&self, port: Port) -> Option<&Path> {
        match port {
            Port::Runner => self.runner.as_deref(),
            Port::Fs => self.fs.as_deref(),
        }
    }

    /// Read and parse a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the path if the file cannot be read or parsed.
    pub fn read_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Builds replayers for every configured port.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |port: Port| -> Result<Option<CassetteReplayer>, String> {
            self.path(port)
                .map(|path| Self::read_cassette(path).map(|c| CassetteReplayer::new(&c)))
                .transpose()
        };
        Ok(PortReplayers { runner: load(Port::Runner)?, fs: load(Port::Fs)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Interaction, Port};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = tempfile::tempdir().unwrap();
        let runner_path = dir.path().join("runner.cassette.yaml");
        write_cassette(
            &runner_path,
            vec![Interaction {
                seq: 0,
                port: Port::Runner,
                method: "run".into(),
                input: json!({"argv": ["git", "ls-files"]}),
                output: json!({"ok": {"lines": ["src/lib.rs"], "exit_code": 0}}),
            }],
        );

        let config = CassetteConfig { runner: Some(runner_path), ..CassetteConfig::default() };
        let mut replayers = config.load_all().unwrap();

        let runner = replayers.runner.as_mut().unwrap();
        let interaction = runner.next_interaction(Port::Runner, "run");
        assert_eq!(interaction.output["ok"]["lines"][0], json!("src/lib.rs"));
        assert!(replayers.fs.is_none());
    }

    #[test]
    fn from_dir_only_configures_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        write_cassette(&dir.path().join("fs.cassette.yaml"), Vec::new());

        let config = CassetteConfig::from_dir(dir.path());
        assert_eq!(config.path(Port::Fs), Some(dir.path().join("fs.cassette.yaml").as_path()));
        assert!(config.path(Port::Runner).is_none());
    }

    #[test]
    fn load_all_with_no_cassettes() {
        let replayers = CassetteConfig::panic_on_unspecified().load_all().unwrap();
        assert!(replayers.runner.is_none());
        assert!(replayers.fs.is_none());
    }

    #[test]
    fn unreadable_cassette_names_the_path() {
        let config = CassetteConfig {
            fs: Some(PathBuf::from("/nonexistent/fs.cassette.yaml")),
            ..CassetteConfig::default()
        };
        let err = config.load_all().err().expect("missing file must fail");
        assert!(err.contains("/nonexistent/fs.cassette.yaml"));
    }

    #[test]
    fn malformed_cassette_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.cassette.yaml");
        std::fs::write(&path, "interactions: [not, a, cassette").unwrap();

        let err = CassetteConfig::read_cassette(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse cassette file"));
    }
}
