use crate::agents::definition::AgentDefinition;
use crate::agents::registry::Registry;
use crate::error::Result;
use crate::store::ConfigStore;

pub fn execute(
    store: &ConfigStore,
    key: &str,
    command: Option<&str>,
    model: Option<&str>,
) -> Result<()> {
    let Some(mut registry) = Registry::open(store)? else {
        println!("roles.yaml not found. Run 'agents init' first.");
        return Ok(());
    };

    let definition = AgentDefinition::custom(key, command, model);
    registry.insert(key, &definition)?;
    registry.save()?;

    store.seed_workspace(key)?;

    println!("Added agent: {}", key);

    Ok(())
}
