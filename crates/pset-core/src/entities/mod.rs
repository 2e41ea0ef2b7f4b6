//! Entity structs for pset domain objects.
//!
//! `Task` and `Problem` map to tables in the libSQL database; `Session` is
//! persisted by `pset-auth` as a JSON file; `ProblemEntry` is the transient
//! output of payload recovery. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod problem;
mod session;
mod task;

pub use problem::{Problem, ProblemEntry};
pub use session::Session;
pub use task::{Task, TaskFilter};
