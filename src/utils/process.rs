//! External process invocation.
//!
//! Every subprocess this tool touches (git, tmux, brew, osascript) goes
//! through the [`ProcessRunner`] trait: argument vector in, exit status and
//! captured output out. Backends stay substitutable and the orchestration
//! logic is testable with a recording stub.

use crate::error::{AgentsError, Result};
use std::process::Command;

/// Outcome of one subprocess invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub trait ProcessRunner {
    /// Run a command to completion, capturing its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput>;

    /// Run a command to completion with inherited stdio, for interactive
    /// tools and installers whose output the user should see.
    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<RunOutput>;
}

/// Runner backed by real subprocesses.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            AgentsError::CommandFailed(format!("Failed to execute {}: {}", program, e))
        })?;

        Ok(RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
        let status = Command::new(program).args(args).status().map_err(|e| {
            AgentsError::CommandFailed(format!("Failed to execute {}: {}", program, e))
        })?;

        Ok(RunOutput {
            success: status.success(),
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}
