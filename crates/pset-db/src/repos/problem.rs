//! Problem repository.

use chrono::Utc;

use pset_core::entities::Problem;
use pset_core::ids::PREFIX_PROBLEM;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_datetime, require_non_blank};
use crate::service::PsetService;

const SELECT_COLS: &str = "id, task_id, problem_key, content, answered, created_at, updated_at";

fn row_to_problem(row: &libsql::Row) -> Result<Problem, DatabaseError> {
    Ok(Problem {
        id: row.get(0)?,
        task_id: row.get(1)?,
        problem_key: row.get(2)?,
        content: row.get(3)?,
        answered: get_bool(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Fields for a new problem; `answered` always starts out false.
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub task_id: String,
    pub problem_key: String,
    pub content: String,
}

/// Answered/total counts for one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProblemCounts {
    pub total: u64,
    pub answered: u64,
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "problem",
        id: id.to_string(),
    }
}

impl PsetService {
    /// Create a problem entered by hand; blank content is rejected.
    pub async fn create_problem(&self, new: NewProblem) -> Result<Problem, DatabaseError> {
        require_non_blank("content", &new.content)?;
        self.store_problem(new).await
    }

    /// Store a problem as given, including empty content.
    ///
    /// Imports go through here so every recovered entry is written.
    pub async fn store_problem(&self, new: NewProblem) -> Result<Problem, DatabaseError> {
        require_non_blank("task_id", &new.task_id)?;
        require_non_blank("problem_key", &new.problem_key)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROBLEM).await?;

        let inserted = self
            .db()
            .execute(
                &format!("INSERT INTO problems ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)"),
                vec![
                    id.clone().into(),
                    new.task_id.clone().into(),
                    new.problem_key.clone().into(),
                    new.content.clone().into(),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ],
            )
            .await;

        match inserted {
            Err(DatabaseError::LibSql(e))
                if e.to_string().contains("FOREIGN KEY constraint failed") =>
            {
                return Err(DatabaseError::NotFound {
                    entity: "task",
                    id: new.task_id,
                });
            }
            other => {
                other?;
            }
        }

        Ok(Problem {
            id,
            task_id: new.task_id,
            problem_key: new.problem_key,
            content: new.content,
            answered: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_problem(&self, id: &str) -> Result<Problem, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM problems WHERE id = ?1"),
                vec![id.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| not_found(id))?;
        row_to_problem(&row)
    }

    /// Problems of a task (by task key), in insertion order.
    pub async fn list_problems(&self, task_id: &str) -> Result<Vec<Problem>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM problems WHERE task_id = ?1 ORDER BY rowid"
                ),
                vec![task_id.into()],
            )
            .await?;

        let mut problems = Vec::new();
        while let Some(row) = rows.next().await? {
            problems.push(row_to_problem(&row)?);
        }
        Ok(problems)
    }

    pub async fn set_answered(&self, id: &str, answered: bool) -> Result<Problem, DatabaseError> {
        let affected = self
            .db()
            .execute(
                "UPDATE problems SET answered = ?1, updated_at = ?2 WHERE id = ?3",
                vec![
                    i64::from(answered).into(),
                    Utc::now().to_rfc3339().into(),
                    id.into(),
                ],
            )
            .await?;
        if affected == 0 {
            return Err(not_found(id));
        }
        self.get_problem(id).await
    }

    pub async fn delete_problem(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM problems WHERE id = ?1", vec![id.into()])
            .await?;
        if affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub async fn count_problems(&self, task_id: &str) -> Result<ProblemCounts, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT COUNT(*), COALESCE(SUM(answered), 0) FROM problems WHERE task_id = ?1",
                vec![task_id.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total: i64 = row.get(0)?;
        let answered: i64 = row.get(1)?;
        Ok(ProblemCounts {
            total: u64::try_from(total).unwrap_or_default(),
            answered: u64::try_from(answered).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_task, test_service};
    use pretty_assertions::assert_eq;

    fn new_problem(task_id: &str, key: &str, content: &str) -> NewProblem {
        NewProblem {
            task_id: task_id.into(),
            problem_key: key.into(),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn create_list_and_count() {
        let svc = test_service().await;
        seed_task(&svc, "task_1", "user-1").await;

        let p1 = svc
            .create_problem(new_problem("task_1", "content1", "1 + 1 = ?"))
            .await
            .unwrap();
        svc.create_problem(new_problem("task_1", "content2", "Solve \\[x^2=4\\]"))
            .await
            .unwrap();
        assert!(p1.id.starts_with("prb-"));
        assert!(!p1.answered);

        let listed = svc.list_problems("task_1").await.unwrap();
        let keys: Vec<_> = listed.iter().map(|p| p.problem_key.as_str()).collect();
        assert_eq!(keys, vec!["content1", "content2"]);
        assert_eq!(listed[1].content, "Solve \\[x^2=4\\]");

        assert_eq!(
            svc.count_problems("task_1").await.unwrap(),
            ProblemCounts {
                total: 2,
                answered: 0
            }
        );
    }

    #[tokio::test]
    async fn blank_content_and_task_are_rejected() {
        let svc = test_service().await;
        seed_task(&svc, "task_1", "user-1").await;

        let err = svc
            .create_problem(new_problem("task_1", "content1", "   "))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: content is required");

        let err = svc
            .create_problem(new_problem("", "content1", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: task_id is required");
    }

    #[tokio::test]
    async fn store_problem_keeps_empty_content() {
        let svc = test_service().await;
        seed_task(&svc, "task_1", "user-1").await;

        let stored = svc
            .store_problem(new_problem("task_1", "content2", ""))
            .await
            .unwrap();
        assert_eq!(stored.content, "");
        assert_eq!(svc.get_problem(&stored.id).await.unwrap().content, "");

        let err = svc
            .store_problem(new_problem("", "content2", ""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: task_id is required");
    }

    #[tokio::test]
    async fn unknown_task_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .create_problem(new_problem("task_missing", "content1", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "task", .. }), "{err}");
    }

    #[tokio::test]
    async fn answered_toggle_and_delete() {
        let svc = test_service().await;
        seed_task(&svc, "task_1", "user-1").await;
        let problem = svc
            .create_problem(new_problem("task_1", "content1", "x"))
            .await
            .unwrap();

        let answered = svc.set_answered(&problem.id, true).await.unwrap();
        assert!(answered.answered);
        assert_eq!(svc.count_problems("task_1").await.unwrap().answered, 1);

        let reopened = svc.set_answered(&problem.id, false).await.unwrap();
        assert!(!reopened.answered);

        svc.delete_problem(&problem.id).await.unwrap();
        assert!(matches!(
            svc.get_problem(&problem.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
        assert!(svc.set_answered(&problem.id, true).await.is_err());
    }

    #[tokio::test]
    async fn deleting_task_cascades() {
        let svc = test_service().await;
        let task = seed_task(&svc, "task_1", "user-1").await;
        svc.create_problem(new_problem("task_1", "content1", "x"))
            .await
            .unwrap();

        svc.delete_task(&task.id).await.unwrap();
        assert!(svc.list_problems("task_1").await.unwrap().is_empty());
    }
}
