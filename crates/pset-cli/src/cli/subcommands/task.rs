use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        /// Owner (defaults to the session user).
        #[arg(long)]
        user: Option<String>,
        /// Caller-facing key (defaults to task_<millis>).
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        conversation: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Update a task. Any status may be set here; use `transition` for checked moves.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        conversation: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// List tasks.
    List {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        conversation: Option<String>,
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID or key, with its problems.
    Get { id: String },
    /// Delete a task and its problems.
    Delete { id: String },
    /// Move a task to a new status, enforcing the lifecycle.
    Transition { id: String, status: String },
}
