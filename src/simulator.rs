use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

/// Executable the harness runs, relative to the current directory.
pub const DEFAULT_SIMULATOR: &str = "./vmshell";

/// What the simulator left behind on standard output.
#[derive(Debug)]
pub struct Capture {
    pub stdout: String,
    /// `None` if the simulator could not be started at all.
    pub status: Option<ExitStatus>,
}

#[derive(Debug, Clone)]
pub struct Simulator {
    exe: PathBuf,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATOR)
    }
}

impl Simulator {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }

    /// Run `<exe> --src <program>` to completion and collect its stdout.
    ///
    /// Launch failures and non-zero exits are logged but never turned into
    /// errors: whatever text was produced (possibly none) is returned for
    /// comparison. There is no timeout.
    pub fn run(&self, program: &Path) -> Capture {
        debug!(exe = %self.exe.display(), program = %program.display(), "spawning simulator");
        let output = Command::new(&self.exe)
            .arg("--src")
            .arg(program)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output();

        match output {
            Ok(out) => {
                if !out.status.success() {
                    warn!(status = %out.status, "simulator exited unsuccessfully");
                }
                Capture {
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    status: Some(out.status),
                }
            }
            Err(err) => {
                warn!(exe = %self.exe.display(), error = %err, "failed to launch simulator");
                Capture {
                    stdout: String::new(),
                    status: None,
                }
            }
        }
    }
}
