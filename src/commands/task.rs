use crate::error::Result;
use crate::store::ConfigStore;
use crate::task::{self, display_field};
use std::fs;

pub fn execute(store: &ConfigStore) -> Result<()> {
    let path = store.task_file();
    if !path.exists() {
        println!("current_task.md not found.");
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;

    // A broken header means no active task, never an error
    match task::parse_front_matter(&content) {
        Some(meta) => {
            println!();
            println!("Current task:");
            println!();
            println!("  ID: {}", meta.id_display());
            println!("  Title: {}", display_field(&meta.title));
            println!("  Status: {}", display_field(&meta.status));
            println!("  Pattern: {}", display_field(&meta.pattern));
        }
        None => println!("No active task"),
    }

    Ok(())
}
