//! Task repository: CRUD, filtered listing, status transitions.

use chrono::Utc;

use pset_core::entities::{Task, TaskFilter};
use pset_core::enums::TaskStatus;
use pset_core::ids::PREFIX_TASK;
use pset_core::responses::TransitionResponse;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, require_non_blank};
use crate::service::PsetService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str =
    "id, task_id, title, user_id, conversation_id, status, created_at, updated_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        task_id: row.get(1)?,
        title: row.get(2)?,
        user_id: row.get(3)?,
        conversation_id: row.get(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

async fn collect_tasks(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

/// Fields for a new task. `status` defaults to `not_started`.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub task_id: String,
    pub title: String,
    pub user_id: String,
    pub conversation_id: String,
    pub status: Option<TaskStatus>,
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "task",
        id: id.to_string(),
    }
}

impl PsetService {
    pub async fn create_task(&self, new: NewTask) -> Result<Task, DatabaseError> {
        require_non_blank("task_id", &new.task_id)?;
        require_non_blank("title", &new.title)?;
        require_non_blank("user_id", &new.user_id)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;
        let status = new.status.unwrap_or_default();

        let inserted = self
            .db()
            .execute(
                &format!("INSERT INTO tasks ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
                vec![
                    id.clone().into(),
                    new.task_id.clone().into(),
                    new.title.clone().into(),
                    new.user_id.clone().into(),
                    new.conversation_id.clone().into(),
                    status.as_str().into(),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ],
            )
            .await;

        match inserted {
            Err(DatabaseError::LibSql(e)) if e.to_string().contains("UNIQUE constraint failed") => {
                return Err(DatabaseError::Validation(format!(
                    "task_id '{}' already exists",
                    new.task_id
                )));
            }
            other => {
                other?;
            }
        }

        tracing::debug!(%id, task_id = %new.task_id, "created task");
        Ok(Task {
            id,
            task_id: new.task_id,
            title: new.title,
            user_id: new.user_id,
            conversation_id: new.conversation_id,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Look up a task by its store-assigned id (`tsk-…`).
    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"),
                vec![id.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| not_found(id))?;
        row_to_task(&row)
    }

    /// Look up a task by its caller-facing key (`task_…`).
    pub async fn get_task_by_key(&self, task_id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE task_id = ?1"),
                vec![task_id.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| not_found(task_id))?;
        row_to_task(&row)
    }

    /// Look up a task by id when `id_or_key` carries the task prefix, by key otherwise.
    pub async fn find_task(&self, id_or_key: &str) -> Result<Task, DatabaseError> {
        if pset_core::ids::known_prefix(id_or_key) == Some(PREFIX_TASK) {
            self.get_task(id_or_key).await
        } else {
            self.get_task_by_key(id_or_key).await
        }
    }

    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Task, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            require_non_blank("title", title)?;
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref user_id) = update.user_id {
            require_non_blank("user_id", user_id)?;
            sets.push(format!("user_id = ?{idx}"));
            params.push(user_id.clone().into());
            idx += 1;
        }
        if let Some(ref conversation_id) = update.conversation_id {
            sets.push(format!("conversation_id = ?{idx}"));
            params.push(conversation_id.clone().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_task(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{idx}", sets.join(", "));
        if self.db().execute(&sql, params).await? == 0 {
            return Err(not_found(id));
        }

        self.get_task(id).await
    }

    /// Delete a task; its problems go with it.
    pub async fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM tasks WHERE id = ?1", vec![id.into()])
            .await?;
        if affected == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "deleted task");
        Ok(())
    }

    /// List tasks matching every set filter field, newest first.
    pub async fn list_tasks(
        &self,
        filter: &TaskFilter,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        let text_filters = [
            ("id", filter.id.as_deref()),
            ("task_id", filter.task_id.as_deref()),
            ("user_id", filter.user_id.as_deref()),
            ("status", filter.status.map(TaskStatus::as_str)),
            ("conversation_id", filter.conversation_id.as_deref()),
        ];
        for (column, value) in text_filters {
            if let Some(value) = value {
                params.push(value.into());
                clauses.push(format!("{column} = ?{}", params.len()));
            }
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        params.push(i64::from(limit).into());
        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks{where_sql} ORDER BY created_at DESC, id LIMIT ?{}",
            params.len()
        );

        let rows = self.db().query(&sql, params).await?;
        collect_tasks(rows).await
    }

    /// Move a task along its state machine.
    pub async fn transition_task(
        &self,
        id: &str,
        new_status: TaskStatus,
    ) -> Result<TransitionResponse, DatabaseError> {
        let current = self.get_task(id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition task {id} from {} to {new_status}",
                current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .execute(
                "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3",
                vec![
                    new_status.as_str().into(),
                    now.to_rfc3339().into(),
                    id.into(),
                ],
            )
            .await?;

        let from = current.status;
        Ok(TransitionResponse {
            task: Task {
                status: new_status,
                updated_at: now,
                ..current
            },
            from,
            to: new_status,
        })
    }
}
