//! Data written through one service is visible after reopening the file.

use pset_core::entities::TaskFilter;
use pset_db::repos::problem::NewProblem;
use pset_db::repos::task::NewTask;
use pset_db::service::PsetService;

#[tokio::test]
async fn reopen_keeps_tasks_and_problems() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pset.db");
    let path = path.to_str().unwrap();

    {
        let svc = PsetService::new_local(path).await.unwrap();
        svc.create_task(NewTask {
            task_id: "task_1700000000000".into(),
            title: "Geometry".into(),
            user_id: "tutor-1".into(),
            conversation_id: "conv_1700000000000".into(),
            status: None,
        })
        .await
        .unwrap();
        svc.create_problem(NewProblem {
            task_id: "task_1700000000000".into(),
            problem_key: "content1".into(),
            content: "Area of a unit circle?".into(),
        })
        .await
        .unwrap();
    }

    let svc = PsetService::new_local(path).await.unwrap();
    let tasks = svc.list_tasks(&TaskFilter::default(), 20).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Geometry");

    let problems = svc.list_problems("task_1700000000000").await.unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].content, "Area of a unit circle?");
}
