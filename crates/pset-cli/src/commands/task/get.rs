use pset_core::responses::TaskDetail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.service.find_task(id).await?;
    let problems = ctx.service.list_problems(&task.task_id).await?;
    output(&TaskDetail { task, problems }, flags.format)
}
