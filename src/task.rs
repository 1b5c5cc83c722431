//! The current-task record: YAML front matter followed by free text.
//!
//! Agents mutate this file directly, so a missing or broken header is an
//! expected state, not an error. Parsing returns `None` for anything that
//! is not a well-formed header and the caller shows "no active task".

use serde::Deserialize;
use serde_yaml::Value;

const MARKER: &str = "---";

#[derive(Debug, Default, Deserialize)]
pub struct TaskMeta {
    /// Scalar of any YAML type; agents write numbers as well as strings.
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub pattern: Option<String>,
}

impl TaskMeta {
    pub fn id_display(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => "N/A".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| "N/A".to_string()),
        }
    }
}

pub fn display_field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Parse the front matter header of a task file. The content must start
/// with the marker and contain a closing marker; the header in between must
/// be valid YAML. Everything else is `None`.
pub fn parse_front_matter(content: &str) -> Option<TaskMeta> {
    if !content.starts_with(MARKER) {
        return None;
    }

    let mut parts = content.splitn(3, MARKER);
    parts.next()?;
    let header = parts.next()?;
    parts.next()?;

    serde_yaml::from_str(header).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let content = "---\nid: T-12\ntitle: Wire up auth\nstatus: active\npattern: pair\n---\n\nNotes here.\n";
        let meta = parse_front_matter(content).unwrap();
        assert_eq!(meta.id_display(), "T-12");
        assert_eq!(meta.title.as_deref(), Some("Wire up auth"));
        assert_eq!(meta.status.as_deref(), Some("active"));
        assert_eq!(meta.pattern.as_deref(), Some("pair"));
    }

    #[test]
    fn test_parse_placeholder_header() {
        let content = "---\nid: null\ntitle: null\nstatus: idle\n---\n\n# No active task\n";
        let meta = parse_front_matter(content).unwrap();
        assert_eq!(meta.id_display(), "N/A");
        assert!(meta.title.is_none());
        assert_eq!(meta.status.as_deref(), Some("idle"));
        assert!(meta.pattern.is_none());
    }

    #[test]
    fn test_numeric_id() {
        let content = "---\nid: 42\nstatus: active\n---\nbody\n";
        let meta = parse_front_matter(content).unwrap();
        assert_eq!(meta.id_display(), "42");
    }

    #[test]
    fn test_missing_header_is_none() {
        assert!(parse_front_matter("# Just a markdown file\n").is_none());
        assert!(parse_front_matter("").is_none());
    }

    #[test]
    fn test_unterminated_header_is_none() {
        assert!(parse_front_matter("---\nstatus: idle\n").is_none());
    }

    #[test]
    fn test_malformed_yaml_is_none() {
        assert!(parse_front_matter("---\n: [unbalanced\n---\nbody\n").is_none());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let content = "---\nstatus: active\nassignee: claude\n---\nbody\n";
        let meta = parse_front_matter(content).unwrap();
        assert_eq!(meta.status.as_deref(), Some("active"));
    }

    #[test]
    fn test_display_field_fallback() {
        assert_eq!(display_field(&None), "N/A");
        assert_eq!(display_field(&Some("idle".to_string())), "idle");
    }
}
