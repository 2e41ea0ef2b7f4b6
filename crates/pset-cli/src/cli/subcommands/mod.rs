mod auth;
mod import;
mod problem;
mod task;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use import::{ImportCommands, ImportRunArgs, PayloadInput};
pub use problem::ProblemCommands;
pub use task::TaskCommands;
