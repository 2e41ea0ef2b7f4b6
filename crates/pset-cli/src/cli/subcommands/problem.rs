use clap::Subcommand;

/// Problem commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProblemCommands {
    /// Add a problem to a task.
    Create {
        /// Task ID or key.
        task: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        content: String,
    },
    /// Get a problem by ID.
    Get { id: String },
    /// List the problems of a task.
    List {
        /// Task ID or key.
        task: String,
    },
    /// Mark a problem answered.
    Answer {
        id: String,
        /// Mark unanswered instead.
        #[arg(long)]
        undo: bool,
    },
    /// Delete a problem.
    Delete { id: String },
}
