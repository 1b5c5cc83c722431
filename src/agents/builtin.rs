//! The fixed set of agents available without registry entries.
//!
//! Both the init fallback (workspace folders) and the start command
//! (launchable set) resolve against this one table.

/// A predefined agent available without persistence.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinAgent {
    pub key: &'static str,
    pub display_name: &'static str,
    pub command: &'static str,
}

/// Launch order for `start` with no arguments follows this ordering.
pub const BUILTIN_AGENTS: [BuiltinAgent; 3] = [
    BuiltinAgent {
        key: "claude",
        display_name: "Claude Code",
        command: "claude",
    },
    BuiltinAgent {
        key: "gemini",
        display_name: "Gemini CLI",
        command: "gemini",
    },
    BuiltinAgent {
        key: "opencode",
        display_name: "OpenCode",
        command: "opencode",
    },
];

pub fn find(key: &str) -> Option<&'static BuiltinAgent> {
    BUILTIN_AGENTS.iter().find(|agent| agent.key == key)
}

pub fn default_keys() -> Vec<String> {
    BUILTIN_AGENTS
        .iter()
        .map(|agent| agent.key.to_string())
        .collect()
}
