//! Terminal.app automation for the non-tmux path.

use crate::error::{AgentsError, Result};
use crate::utils::process::ProcessRunner;

pub struct TerminalApp<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> TerminalApp<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Open a new Terminal tab running `command`.
    pub fn open_tab(&self, command: &str) -> Result<()> {
        let script = format!(
            "tell application \"Terminal\"\n    activate\n    do script \"{}\"\nend tell",
            applescript_escape(command)
        );

        let output = self.runner.run("osascript", &["-e", &script])?;
        if !output.success {
            return Err(AgentsError::CommandFailed(format!(
                "osascript failed: {}",
                output.stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Escape a command line for embedding in an AppleScript string literal.
fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::testing::RecordingRunner;

    #[test]
    fn test_open_tab_runs_osascript() {
        let runner = RecordingRunner::new();
        let terminal = TerminalApp::new(&runner);
        terminal.open_tab("cd '/work' && claude").unwrap();

        let calls = runner.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], "osascript");
        assert_eq!(calls[0][1], "-e");
        assert!(calls[0][2].contains("tell application \"Terminal\""));
        assert!(calls[0][2].contains("cd '/work' && claude"));
    }

    #[test]
    fn test_open_tab_failure_is_error() {
        let runner = RecordingRunner::failing();
        let terminal = TerminalApp::new(&runner);
        assert!(terminal.open_tab("claude").is_err());
    }

    #[test]
    fn test_applescript_escape() {
        assert_eq!(applescript_escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(applescript_escape(r"a\b"), r"a\\b");
    }
}
