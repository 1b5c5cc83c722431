//! The persisted agent registry (`roles.yaml`).
//!
//! The registry is one YAML document with an `agents` mapping at the top
//! level. The whole document is kept in memory across a read-modify-write
//! so unrelated keys the template ships survive an insert, and mapping
//! order is preserved so list output follows file order.

use super::definition::AgentDefinition;
use crate::error::{AgentsError, Result};
use crate::store::ConfigStore;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

const AGENTS_KEY: &str = "agents";

pub struct Registry {
    path: PathBuf,
    doc: Mapping,
}

impl Registry {
    /// Open the registry file. `Ok(None)` means the file does not exist
    /// (the caller points the user at init); a file that exists but is
    /// not valid YAML is an error.
    pub fn open(store: &ConfigStore) -> Result<Option<Self>> {
        let path = store.roles_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let doc = match serde_yaml::from_str::<Value>(&content)? {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(AgentsError::InvalidRegistry(
                    "roles.yaml must contain a mapping at the top level".to_string(),
                ))
            }
        };

        Ok(Some(Self { path, doc }))
    }

    /// Insert or overwrite the entry for `key`. Last write wins; there is
    /// no merge with an existing record.
    pub fn insert(&mut self, key: &str, definition: &AgentDefinition) -> Result<()> {
        let value = serde_yaml::to_value(definition)?;
        let agents_key = Value::from(AGENTS_KEY);

        if !matches!(self.doc.get(&agents_key), Some(Value::Mapping(_))) {
            self.doc
                .insert(agents_key.clone(), Value::Mapping(Mapping::new()));
        }
        if let Some(Value::Mapping(agents)) = self.doc.get_mut(&agents_key) {
            agents.insert(Value::from(key), value);
        }

        Ok(())
    }

    /// Write the full document back to disk.
    pub fn save(&self) -> Result<()> {
        let content = serde_yaml::to_string(&self.doc)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Every entry in document order. Records that do not deserialize
    /// cleanly fall back to an empty definition rather than failing the
    /// whole listing.
    pub fn agents(&self) -> Vec<(String, AgentDefinition)> {
        let mut entries = Vec::new();
        if let Some(Value::Mapping(agents)) = self.doc.get(&Value::from(AGENTS_KEY)) {
            for (key, value) in agents {
                let Some(key) = key.as_str() else { continue };
                let definition =
                    serde_yaml::from_value(value.clone()).unwrap_or_else(|_| AgentDefinition::default());
                entries.push((key.to_string(), definition));
            }
        }
        entries
    }
}
