use crate::error::Result;
use std::fmt;
use std::path::Path;

/// Primary language guessed from marker files in the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    language: Language,
}

impl Project {
    /// Detect the current project's name and language. Advisory only: the
    /// result is reported to the user and gates nothing.
    pub fn detect() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::detect_in(&cwd))
    }

    pub fn detect_in(dir: &Path) -> Self {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();

        // A package manifest wins over a type-checker config, which wins
        // over Python packaging descriptors.
        let language = if dir.join("package.json").exists() {
            Language::JavaScript
        } else if dir.join("tsconfig.json").exists() {
            Language::TypeScript
        } else if dir.join("pyproject.toml").exists() || dir.join("setup.py").exists() {
            Language::Python
        } else {
            Language::Python
        };

        Self { name, language }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_javascript_from_package_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();

        let project = Project::detect_in(tmp.path());
        assert_eq!(project.language(), Language::JavaScript);
    }

    #[test]
    fn test_detect_typescript_from_tsconfig() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("tsconfig.json"), "{}").unwrap();

        let project = Project::detect_in(tmp.path());
        assert_eq!(project.language(), Language::TypeScript);
    }

    #[test]
    fn test_package_manifest_wins_over_tsconfig() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        fs::write(tmp.path().join("tsconfig.json"), "{}").unwrap();

        let project = Project::detect_in(tmp.path());
        assert_eq!(project.language(), Language::JavaScript);
    }

    #[test]
    fn test_detect_python_from_pyproject() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("pyproject.toml"), "").unwrap();

        let project = Project::detect_in(tmp.path());
        assert_eq!(project.language(), Language::Python);
    }

    #[test]
    fn test_detect_defaults_to_python() {
        let tmp = tempfile::tempdir().unwrap();

        let project = Project::detect_in(tmp.path());
        assert_eq!(project.language(), Language::Python);
    }

    #[test]
    fn test_project_name_is_directory_basename() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("my-service");
        fs::create_dir(&dir).unwrap();

        let project = Project::detect_in(&dir);
        assert_eq!(project.name(), "my-service");
    }
}
