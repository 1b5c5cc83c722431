use crate::agents::builtin::BUILTIN_AGENTS;
use crate::error::{AgentsError, Result};
use crate::project::Project;
use crate::store::ConfigStore;
use crate::utils::{git, process::ProcessRunner};
use std::fs;
use std::io::{self, Write};

pub fn execute(
    store: &ConfigStore,
    runner: &dyn ProcessRunner,
    template: &str,
    force: bool,
    template_repo: &str,
) -> Result<()> {
    if store.exists() {
        if !force {
            println!(".agents folder already exists. Use --force to overwrite.");
            return Ok(());
        }
        if !confirm_wipe(store)? {
            println!("Aborted.");
            return Ok(());
        }
        wipe(store)?;
    }

    println!("Initializing multi-agent collaboration workspace...");

    match git::clone(runner, template_repo, store.root()) {
        Ok(()) => git::strip_metadata(store.root())?,
        Err(_) => {
            println!("Template fetch failed. Creating folder structure locally...");
            scaffold_fallback(store, template_repo)?;
        }
    }

    // Copy the language template into place when the template tree ships one
    let template_file = store.template_file(template);
    if template_file.exists() {
        fs::copy(&template_file, store.project_file())?;
        println!("Created project.yaml from {} template", template);

        let project = Project::detect()?;
        println!("Detected: {} ({})", project.name(), project.language());
    }

    println!("Initialization complete.");
    println!();
    println!("Next steps:");
    println!("  1. Edit .agents/project.yaml with your project settings");
    println!("  2. Run: agents start");
    println!("  3. Give each agent the protocol instruction");

    Ok(())
}

/// The force path discards all saved registry and task state, so it is
/// confirmed interactively before anything is touched.
fn confirm_wipe(store: &ConfigStore) -> Result<bool> {
    println!("{} already exists.", store.root().display());
    println!("This will delete the folder and all saved agent state.");
    println!();
    print!("Delete and re-initialize? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}

/// Delete the configuration directory and verify it is fully gone, so a
/// half-removed tree is never mistaken for a valid one.
fn wipe(store: &ConfigStore) -> Result<()> {
    fs::remove_dir_all(store.root())?;
    if store.exists() {
        return Err(AgentsError::Workspace(format!(
            "failed to remove {}",
            store.root().display()
        )));
    }
    Ok(())
}

/// Offline scaffold: the minimal tree every other command needs.
fn scaffold_fallback(store: &ConfigStore, template_repo: &str) -> Result<()> {
    fs::create_dir_all(store.discussions_dir())?;
    fs::create_dir_all(store.templates_dir())?;
    for agent in &BUILTIN_AGENTS {
        fs::create_dir_all(store.workspace_dir(agent.key))?;
    }

    fs::write(
        store.task_file(),
        "---\nid: null\ntitle: null\nstatus: idle\n---\n\n# No active task\n",
    )?;

    fs::write(
        store.protocol_file(),
        format!("# Multi-Agent Collaboration Protocol\n\nSee: {}\n", template_repo),
    )?;

    Ok(())
}
