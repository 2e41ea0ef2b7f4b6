use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Reuse the stored session or sign in.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Sign in as this user instead of anonymously.
    #[arg(long)]
    pub user: Option<String>,
}
