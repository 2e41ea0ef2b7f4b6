use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored problem belonging to a task (via `task_id`, the task key).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    pub task_id: String,
    pub problem_key: String,
    pub content: String,
    pub answered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One problem recovered from an import payload.
///
/// `index` is the digit suffix of `key` (`"content12"` → `"12"`). `content`
/// is already unescaped and trimmed; it may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProblemEntry {
    pub index: String,
    pub key: String,
    pub content: String,
}
