//! Response types returned as JSON by `pset` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `pset import preview`, `pset import run`, `pset task transition`,
//! and `pset auth status`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Problem, ProblemEntry, Task};
use crate::enums::{RecoveryMethod, TaskStatus};

/// Response from `pset import preview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportPreview {
    pub method: RecoveryMethod,
    pub count: usize,
    pub entries: Vec<ProblemEntry>,
}

/// Result of writing one recovered entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    Created { key: String, problem_id: String },
    Failed { key: String, error: String },
}

impl EntryOutcome {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Created { key, .. } | Self::Failed { key, .. } => key,
        }
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Response from `pset import run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportReport {
    pub task: Task,
    pub method: Option<RecoveryMethod>,
    pub outcomes: Vec<EntryOutcome>,
    pub created: usize,
    pub failed: usize,
}

impl ImportReport {
    /// Whether every entry was written.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Response from `pset task transition`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransitionResponse {
    pub task: Task,
    pub from: TaskStatus,
    pub to: TaskStatus,
}

/// Response from `pset task get`, with the task's problems attached.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDetail {
    pub task: Task,
    pub problems: Vec<Problem>,
}

/// Response from `pset auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub anonymous: Option<bool>,
    pub expires_at: Option<DateTime<Utc>>,
    pub session_path: String,
}
