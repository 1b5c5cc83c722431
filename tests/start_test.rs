use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Run `start` with an empty PATH so no real terminal automation can
/// spawn; every attempt is reported per-agent without aborting the run.
fn start_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agents"));
    cmd.current_dir(dir);
    cmd.env("PATH", "");
    cmd
}

fn init_config_dir(dir: &Path) {
    fs::create_dir_all(dir.join(".agents")).unwrap();
}

#[test]
fn test_start_without_config_dir_reports_and_exits_cleanly() {
    let tmp = tempfile::tempdir().unwrap();

    start_cmd(tmp.path())
        .args(["start", "--no-tmux"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".agents folder not found"))
        .stdout(predicate::str::contains("agents init"));
}

#[test]
fn test_start_defaults_to_all_builtin_agents() {
    let tmp = tempfile::tempdir().unwrap();
    init_config_dir(tmp.path());

    start_cmd(tmp.path())
        .args(["start", "--no-tmux"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Starting agents: claude, gemini, opencode",
        ));
}

#[test]
fn test_start_unknown_agent_warns_and_continues() {
    let tmp = tempfile::tempdir().unwrap();
    init_config_dir(tmp.path());

    start_cmd(tmp.path())
        .args(["start", "claude", "unknownagent", "--no-tmux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown agent: unknownagent"))
        .stdout(predicate::str::contains("Claude Code"));
}

#[test]
fn test_start_failed_spawns_are_reported_per_agent() {
    let tmp = tempfile::tempdir().unwrap();
    init_config_dir(tmp.path());

    // With an empty PATH the automation tool cannot spawn; both agents
    // are still attempted and reported.
    start_cmd(tmp.path())
        .args(["start", "claude", "gemini", "--no-tmux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to start Claude Code"))
        .stdout(predicate::str::contains("Failed to start Gemini CLI"));
}
