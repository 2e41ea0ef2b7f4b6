//! Shared test utilities for pset-db unit tests.

use pset_core::entities::Task;

use crate::repos::task::NewTask;
use crate::service::PsetService;

/// Create an in-memory `PsetService`.
pub async fn test_service() -> PsetService {
    PsetService::new_local(":memory:").await.unwrap()
}

/// Insert a task with the given key for `user_id`.
pub async fn seed_task(svc: &PsetService, task_id: &str, user_id: &str) -> Task {
    svc.create_task(NewTask {
        task_id: task_id.to_string(),
        title: format!("Set {task_id}"),
        user_id: user_id.to_string(),
        conversation_id: format!("conv_{task_id}"),
        status: None,
    })
    .await
    .unwrap()
}
