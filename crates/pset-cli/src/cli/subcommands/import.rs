use clap::{Args, Subcommand};

/// Payload import commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ImportCommands {
    /// Show what would be imported, without writing.
    Preview(PayloadInput),
    /// Report structural problems in the payload.
    Check(PayloadInput),
    /// Print the payload with textual repairs applied.
    Repair(PayloadInput),
    /// Import the payload as a new task with one problem per entry.
    Run(ImportRunArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PayloadInput {
    /// Payload file; `-` or omitted reads stdin.
    pub path: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportRunArgs {
    #[command(flatten)]
    pub input: PayloadInput,
    /// Owner of the new task (defaults to config, then the session user).
    #[arg(long)]
    pub user: Option<String>,
    /// Task title (defaults to "<default title> (<N> problems)").
    #[arg(long)]
    pub title: Option<String>,
}
