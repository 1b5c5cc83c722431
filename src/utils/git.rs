use crate::error::{AgentsError, Result};
use crate::utils::process::ProcessRunner;
use std::fs;
use std::path::Path;

/// Clone `repo` into `dest`. Any failure (git missing, offline, remote
/// gone) surfaces as an error so the caller can fall back to a local
/// scaffold.
pub fn clone(runner: &dyn ProcessRunner, repo: &str, dest: &Path) -> Result<()> {
    let dest = dest.to_string_lossy();
    let output = runner.run("git", &["clone", repo, &dest])?;

    if !output.success {
        return Err(AgentsError::Git(format!(
            "clone of {} failed: {}",
            repo,
            output.stderr.trim()
        )));
    }

    Ok(())
}

/// Remove version-control metadata from a fetched tree so it carries no
/// history or remote linkage of its own.
pub fn strip_metadata(tree: &Path) -> Result<()> {
    let git_dir = tree.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(git_dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::testing::RecordingRunner;

    #[test]
    fn test_clone_invokes_git() {
        let runner = RecordingRunner::new();
        clone(&runner, "https://example.com/tpl.git", Path::new("/tmp/.agents")).unwrap();

        let calls = runner.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec!["git", "clone", "https://example.com/tpl.git", "/tmp/.agents"]
        );
    }

    #[test]
    fn test_clone_failure_is_error() {
        let runner = RecordingRunner::failing();
        let result = clone(&runner, "https://example.com/tpl.git", Path::new("/tmp/.agents"));
        assert!(result.is_err());
    }

    #[test]
    fn test_strip_metadata_removes_git_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let git_dir = tmp.path().join(".git");
        fs::create_dir_all(git_dir.join("refs")).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();

        strip_metadata(tmp.path()).unwrap();
        assert!(!git_dir.exists());
    }

    #[test]
    fn test_strip_metadata_tolerates_missing_git_dir() {
        let tmp = tempfile::tempdir().unwrap();
        strip_metadata(tmp.path()).unwrap();
    }
}
