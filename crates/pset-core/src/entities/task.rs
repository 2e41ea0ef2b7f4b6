use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// An AI task grouping a set of imported problems.
///
/// `id` is store-assigned (`tsk-xxxxxxxx`); `task_id` is the caller-facing key
/// that problems reference.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub task_id: String,
    pub title: String,
    pub user_id: String,
    pub conversation_id: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Equality filters for listing tasks. Every set field is AND-ed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskFilter {
    pub id: Option<String>,
    pub task_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<TaskStatus>,
    pub conversation_id: Option<String>,
}

impl TaskFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.task_id.is_none()
            && self.user_id.is_none()
            && self.status.is_none()
            && self.conversation_id.is_none()
    }

    /// Whether `task` satisfies every set field.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.id.as_ref().is_none_or(|v| *v == task.id)
            && self.task_id.as_ref().is_none_or(|v| *v == task.task_id)
            && self.user_id.as_ref().is_none_or(|v| *v == task.user_id)
            && self.status.is_none_or(|v| v == task.status)
            && self
                .conversation_id
                .as_ref()
                .is_none_or(|v| *v == task.conversation_id)
    }
}
