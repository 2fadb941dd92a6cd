//! Live command runner using `std::process::Command`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::ports::runner::{CommandRunner, RunOutput, RunnerError};

/// Live command runner that spawns the program directly, without a shell.
pub struct LiveCommandRunner;

impl CommandRunner for LiveCommandRunner {
    fn run(&self, workdir: &Path, argv: &[String]) -> Result<RunOutput, RunnerError> {
        let (program, args) = argv.split_first().ok_or(RunnerError::EmptyArgv)?;
        debug!(program = %program, ?args, workdir = %workdir.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|source| RunnerError::Spawn { program: program.clone(), source })?;

        let mut lines: Vec<String> =
            String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect();
        lines.extend(String::from_utf8_lossy(&output.stderr).lines().map(String::from));

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(program = %program, exit_code, line_count = lines.len(), "command finished");
        Ok(RunOutput { lines, exit_code })
    }
}
