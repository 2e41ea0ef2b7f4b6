use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ImportCommands, ProblemCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize pset for a project.
    Init(InitArgs),
    /// Problem-set tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Problems within a task.
    Problem {
        #[command(subcommand)]
        action: ProblemCommands,
    },
    /// Recover and import problem payloads.
    Import {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    pub path: Option<String>,
    /// Overwrite an existing config.toml.
    #[arg(long)]
    pub force: bool,
}
