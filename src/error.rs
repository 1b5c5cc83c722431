use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentsError {
    #[error("Git error: {0}")]
    Git(String),

    #[error("Failed to install tmux: {0}")]
    TmuxInstall(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Registry parse error: {0}")]
    RegistryParse(#[from] serde_yaml::Error),

    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workspace error: {0}")]
    Workspace(String),
}

pub type Result<T> = std::result::Result<T, AgentsError>;
