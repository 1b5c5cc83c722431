use crate::agents::builtin;
use crate::error::{AgentsError, Result};
use crate::store::ConfigStore;
use crate::terminal::osascript::TerminalApp;
use crate::terminal::tmux::{Tmux, SESSION_NAME};
use crate::utils::process::ProcessRunner;
use crate::utils::shell;
use std::path::Path;

pub fn execute(
    store: &ConfigStore,
    runner: &dyn ProcessRunner,
    keys: &[String],
    use_tmux: bool,
) -> Result<()> {
    // No arguments means the full built-in set, not the persisted registry
    let requested: Vec<String> = if keys.is_empty() {
        builtin::default_keys()
    } else {
        keys.to_vec()
    };

    println!("Starting agents: {}", requested.join(", "));

    if !store.exists() {
        println!(".agents folder not found. Run 'agents init' first.");
        return Ok(());
    }

    let cwd = std::env::current_dir()?;

    if use_tmux {
        ensure_tmux(runner)?;
        start_with_tmux(runner, &requested, &cwd)
    } else {
        start_in_terminal_windows(runner, &requested, &cwd)
    }
}

/// Verify tmux is available, attempting exactly one install when it is
/// not. A failed install is fatal; there is no alternate backend fallback.
fn ensure_tmux(runner: &dyn ProcessRunner) -> Result<()> {
    if Tmux::is_installed() {
        return Ok(());
    }

    println!("tmux not found. Installing...");
    let output = runner.run_interactive("brew", &["install", "tmux"])?;
    if !output.success {
        return Err(AgentsError::TmuxInstall(
            "please install manually: brew install tmux".to_string(),
        ));
    }
    println!("tmux installed.");

    Ok(())
}

/// One pane per agent inside a single detached session. The first agent
/// reuses the session's initial pane, every later one gets a fresh split.
/// The caller is told how to attach; we never attach for them.
fn start_with_tmux(runner: &dyn ProcessRunner, keys: &[String], cwd: &Path) -> Result<()> {
    let tmux = Tmux::new(runner);
    tmux.new_session(SESSION_NAME)?;

    let mut pane = 0;
    for key in keys {
        let Some(agent) = builtin::find(key) else {
            continue;
        };

        let line = shell::cd_and_run(cwd, agent.command);
        if pane == 0 {
            tmux.send_keys(&format!("{}:0", SESSION_NAME), &line)?;
        } else {
            tmux.split_window(SESSION_NAME)?;
            tmux.send_keys(SESSION_NAME, &line)?;
        }
        pane += 1;
    }

    println!();
    println!("Attach to the tmux session with: tmux attach -t {}", SESSION_NAME);

    Ok(())
}

/// One Terminal window per agent. Spawns are independent: unknown keys
/// and failed spawns are reported and the loop moves on.
fn start_in_terminal_windows(
    runner: &dyn ProcessRunner,
    keys: &[String],
    cwd: &Path,
) -> Result<()> {
    let terminal = TerminalApp::new(runner);

    for key in keys {
        let Some(agent) = builtin::find(key) else {
            println!("Unknown agent: {}", key);
            continue;
        };

        let line = shell::cd_and_run(cwd, agent.command);
        match terminal.open_tab(&line) {
            Ok(()) => println!("  Started {}", agent.display_name),
            Err(_) => println!("  Failed to start {}", agent.display_name),
        }
    }

    Ok(())
}
