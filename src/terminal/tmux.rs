//! tmux session and pane control.
//!
//! Commands are issued strictly in the order the caller asks for them, so
//! the Nth agent lands in the Nth pane.

use crate::error::{AgentsError, Result};
use crate::utils::process::{command_exists, ProcessRunner};

/// Session every agent pane lives in.
pub const SESSION_NAME: &str = "agents";

pub struct Tmux<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> Tmux<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Check if tmux is installed
    pub fn is_installed() -> bool {
        command_exists("tmux")
    }

    /// Create a detached session. A session with this name may already
    /// exist from a previous run; that is fine, panes are added to it.
    pub fn new_session(&self, name: &str) -> Result<()> {
        let _ = self.runner.run("tmux", &["new-session", "-d", "-s", name])?;
        Ok(())
    }

    /// Split the session's current window, creating a new active pane.
    pub fn split_window(&self, session: &str) -> Result<()> {
        let output = self
            .runner
            .run("tmux", &["split-window", "-t", session, "-h"])?;

        if !output.success {
            return Err(AgentsError::CommandFailed(format!(
                "tmux split-window failed: {}",
                output.stderr.trim()
            )));
        }

        Ok(())
    }

    /// Type a command line into the target pane and press Enter.
    pub fn send_keys(&self, target: &str, keys: &str) -> Result<()> {
        let output = self
            .runner
            .run("tmux", &["send-keys", "-t", target, keys, "Enter"])?;

        if !output.success {
            return Err(AgentsError::CommandFailed(format!(
                "tmux send-keys failed: {}",
                output.stderr.trim()
            )));
        }

        Ok(())
    }
}
