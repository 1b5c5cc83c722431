use crate::agents::registry::Registry;
use crate::error::Result;
use crate::store::ConfigStore;

pub fn execute(store: &ConfigStore) -> Result<()> {
    let Some(registry) = Registry::open(store)? else {
        println!("roles.yaml not found.");
        return Ok(());
    };

    println!();
    println!("Registered agents:");
    println!();

    for (key, definition) in registry.agents() {
        let model = if definition.model.is_empty() {
            "N/A"
        } else {
            definition.model.as_str()
        };
        let command = if definition.command.is_empty() {
            key.as_str()
        } else {
            definition.command.as_str()
        };

        println!("  {}", key);
        println!("    Model: {}", model);
        println!("    Command: {}", command);
        println!("    Capabilities: {}", definition.capability_summary());
        println!();
    }

    Ok(())
}
