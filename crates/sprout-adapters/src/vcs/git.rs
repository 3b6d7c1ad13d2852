//! `git init` through the system `git` binary.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

use tracing::{debug, instrument};

use sprout_core::application::ports::{VcsFailure, VersionControl};

/// Runs `<program> init` in the target directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use the `git` found on `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} init", self.program.to_string_lossy())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn name(&self) -> &str {
        "git"
    }

    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn init(&self, dir: &Path) -> Result<(), VcsFailure> {
        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(dir)
            .output()
            .map_err(|e| VcsFailure {
                command: self.command_line(),
                message: e.to_string(),
            })?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(VcsFailure {
                command: self.command_line(),
                message: if combined.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    combined
                },
            });
        }

        debug!(output = %combined, "git init succeeded");
        Ok(())
    }
}

/// Stdout followed by stderr, trimmed.
fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
