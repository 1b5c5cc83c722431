use clap::{Parser, Subcommand};

use crate::store::TEMPLATE_REPO;

#[derive(Parser, Debug)]
#[command(name = "agents")]
#[command(about = "Coordinate multiple AI coding-assistant CLIs in one project", long_about = None)]
#[command(version = env!("AGENTS_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  agents init                        Scaffold the .agents folder
  agents start                       Launch all built-in agents in tmux panes
  agents start claude                Launch only Claude
  agents start --no-tmux             Use Terminal windows instead of tmux
  agents add reviewer -c my-reviewer Register a custom agent

For details about a specific command, use:
  agents <command> --help")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the .agents folder structure
    #[command(long_about = "Initialize the .agents folder structure.\n\n\
        Fetches the shared collaboration template into .agents/. When the\n\
        fetch fails (offline, git missing), a minimal local structure is\n\
        created instead so the other commands still work.")]
    Init {
        /// Language template (python, javascript)
        #[arg(short, long, default_value = "python")]
        template: String,

        /// Overwrite an existing .agents folder
        #[arg(short, long)]
        force: bool,

        /// Template repository to fetch
        #[arg(long, env = "AGENTS_TEMPLATE_REPO", default_value = TEMPLATE_REPO, hide = true)]
        template_repo: String,
    },

    /// Start agent terminals
    #[command(long_about = "Start agent terminals.\n\n\
        Without arguments, launches every built-in agent. Each agent runs\n\
        its CLI command from the current directory, one tmux pane per agent\n\
        (or one Terminal window per agent with --no-tmux).")]
    Start {
        /// Agents to start (defaults to all built-in agents)
        agents: Vec<String>,

        /// Open Terminal windows instead of a tmux session
        #[arg(long = "no-tmux")]
        no_tmux: bool,
    },

    /// Register a new agent
    Add {
        /// Agent key (also used as the workspace folder name)
        name: String,

        /// CLI command to run (defaults to the agent key)
        #[arg(short, long)]
        command: Option<String>,

        /// Model name
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List all registered agents
    List,

    /// Task management commands
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show current task status
    Status,
}
