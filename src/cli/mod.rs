//! CLI adapter for the demonstration agent
//!
//! Parses arguments with clap and runs the agent loop. Parallel to
//! `http/`: both sit on top of the library, neither imports the other.
//!
//! ```text
//! +------------------+      +------------------+
//! |     agent/       |      |  core/ + rpc/    |
//! | (bd work loop)   |      |  (bridge logic)  |
//! +--------+---------+      +--------+---------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      cli/        |      |      http/       |
//! | (clap adapter)   |      | (axum adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

/// Beads agent - demo work loop over the bd issue tracker
///
/// Repeatedly picks the highest-priority ready issue, claims it,
/// simulates the work and closes it.
#[derive(Parser, Debug)]
#[command(name = "beads-agent")]
#[command(version)]
#[command(about = "Demo agent driving the bd issue tracker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the work loop
    Run(commands::RunArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  beads-agent completions bash > ~/.local/share/bash-completion/completions/beads-agent
    ///   zsh:   beads-agent completions zsh > ~/.zfunc/_beads-agent
    ///   fish:  beads-agent completions fish > ~/.config/fish/completions/beads-agent.fish
    Completions(CompletionsArgs),
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// How a CLI invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// Stopped by Ctrl-C; not an error
    Interrupted,
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run(args) => commands::run::execute(args, cli.format).await,
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(args.shell, &mut cmd, name, &mut io::stdout());
            Ok(RunOutcome::Completed)
        }
    }
}
