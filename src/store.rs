//! Paths and file scaffolding for the project-local `.agents/` tree.

use crate::agents::definition::capitalize;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding all persisted collaboration state, relative to the
/// project root.
pub const CONFIG_DIR_NAME: &str = ".agents";

/// Remote repository the init command fetches the shared template from.
pub const TEMPLATE_REPO: &str = "https://github.com/loboking/agents-template";

/// Resolves every path under the configuration directory. Commands other
/// than init expect the directory to already exist and report (rather than
/// create) when it does not.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            root: base.as_ref().join(CONFIG_DIR_NAME),
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn roles_file(&self) -> PathBuf {
        self.root.join("roles.yaml")
    }

    pub fn task_file(&self) -> PathBuf {
        self.root.join("current_task.md")
    }

    pub fn protocol_file(&self) -> PathBuf {
        self.root.join("PROTOCOL.md")
    }

    pub fn project_file(&self) -> PathBuf {
        self.root.join("project.yaml")
    }

    pub fn discussions_dir(&self) -> PathBuf {
        self.root.join("discussions")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn template_file(&self, name: &str) -> PathBuf {
        self.templates_dir().join(format!("{}.yaml", name))
    }

    pub fn workspace_dir(&self, key: &str) -> PathBuf {
        self.root.join("workspace").join(key)
    }

    /// Create the workspace directory for an agent with a seeded readme.
    /// An existing workspace is left untouched; returns whether anything
    /// was created.
    pub fn seed_workspace(&self, key: &str) -> Result<bool> {
        let dir = self.workspace_dir(key);
        if dir.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join("README.md"),
            format!("# {} Workspace\n", capitalize(key)),
        )?;
        Ok(true)
    }
}
