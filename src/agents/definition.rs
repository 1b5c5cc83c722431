//! The agent record persisted in the registry file.

use serde::{Deserialize, Serialize};

/// One coding-assistant integration as stored under the `agents` mapping
/// of `roles.yaml`. Every field is optional on disk; display code falls
/// back to the registry key where a field is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Human-readable label
    #[serde(rename = "name", default)]
    pub display_name: String,

    /// Free-text model identifier
    #[serde(default)]
    pub model: String,

    /// Command line used to start the assistant
    #[serde(rename = "cli_command", default)]
    pub command: String,

    /// Capability tags
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl AgentDefinition {
    /// Build the record for a user-registered agent. Display name is the
    /// capitalized key, the command defaults to the key itself, the model
    /// to the "unknown" sentinel, and capabilities are fixed to coding.
    pub fn custom(key: &str, command: Option<&str>, model: Option<&str>) -> Self {
        Self {
            display_name: capitalize(key),
            model: model.unwrap_or("unknown").to_string(),
            command: command.unwrap_or(key).to_string(),
            capabilities: vec!["coding".to_string()],
        }
    }

    /// At most the first three capability tags, comma separated. Display
    /// only; the stored record is unaffected.
    pub fn capability_summary(&self) -> String {
        self.capabilities
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
