//! Repository modules implementing CRUD operations for pset entities.
//!
//! Each module adds methods to `PsetService` via `impl PsetService` blocks.

pub mod problem;
pub mod task;
