#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use agents_cli::cli::{Cli, Commands, TaskCommands};
use agents_cli::commands;
use agents_cli::store::ConfigStore;
use agents_cli::utils::process::SystemRunner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = ConfigStore::from_current_dir()?;
    let runner = SystemRunner;

    match &cli.command {
        Commands::Init {
            template,
            force,
            template_repo,
        } => {
            commands::init::execute(&store, &runner, template, *force, template_repo)?;
        }
        Commands::Start { agents, no_tmux } => {
            commands::start::execute(&store, &runner, agents, !*no_tmux)?;
        }
        Commands::Add {
            name,
            command,
            model,
        } => {
            commands::add::execute(&store, name, command.as_deref(), model.as_deref())?;
        }
        Commands::List => {
            commands::list::execute(&store)?;
        }
        Commands::Task { command } => match command {
            TaskCommands::Status => {
                commands::task::execute(&store)?;
            }
        },
    }

    Ok(())
}
