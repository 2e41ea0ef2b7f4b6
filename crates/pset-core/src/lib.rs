//! # pset-core
//!
//! Core types shared across all pset crates:
//! - Entity structs for tasks, problems, and recovered problem entries
//! - Status enums with state machine transitions
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
