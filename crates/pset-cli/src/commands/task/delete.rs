use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TaskDeleteResponse {
    id: String,
    task_id: String,
    problems_deleted: u64,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.service.find_task(id).await?;
    let counts = ctx.service.count_problems(&task.task_id).await?;
    ctx.service.delete_task(&task.id).await?;
    output(
        &TaskDeleteResponse {
            id: task.id,
            task_id: task.task_id,
            problems_deleted: counts.total,
        },
        flags.format,
    )
}
