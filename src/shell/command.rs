//! External command execution.
//!
//! Programs are spawned directly with an argument vector rather than through
//! a shell, so package names never need quoting.

use crate::error::{EnvCheckError, Result};
use std::process::{Command, Stdio};
use tracing::trace;

/// Captured output of a finished program.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program exited with code 0.
    pub success: bool,
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandOutput::success`]; only a
/// failure to start the program is an error.
pub fn execute(program: &str, args: &[&str]) -> Result<CommandOutput> {
    trace!("Executing {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| EnvCheckError::CommandFailed {
            command: display_command(program, args),
            message: e.to_string(),
        })?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program];
    parts.extend_from_slice(args);
    parts.join(" ")
}
