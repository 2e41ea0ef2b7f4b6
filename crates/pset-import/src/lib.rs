//! # pset-import
//!
//! Turns pasted problem-set payloads into stored problems:
//!
//! - [`recover`]: the best-effort recovery chain (`content<N>` → text)
//! - [`diagnose`]: advisory structure check with positions and context
//! - [`repair`]: the textual repairs on their own, for manual editing
//! - [`ImportService`]: session check, task creation, per-entry writes

pub mod diagnose;
pub mod error;
pub mod recover;
pub mod service;
pub mod sink;

pub use diagnose::{FormatIssue, FormatReport, diagnose};
pub use error::ImportError;
pub use recover::{Recovery, recover, repair};
pub use service::{ImportRequest, ImportService, check_size, preview};
pub use sink::ProblemSink;
