use pset_core::entities::Problem;
use pset_db::repos::problem::NewProblem;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProblemCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ProblemListResponse {
    task_id: String,
    total: u64,
    answered: u64,
    problems: Vec<Problem>,
}

#[derive(Serialize)]
struct ProblemDeleteResponse {
    id: String,
    deleted: bool,
}

/// Handle `pset problem`.
pub async fn handle(
    action: &ProblemCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProblemCommands::Create { task, key, content } => {
            let task = ctx.service.find_task(task).await?;
            let problem = ctx
                .service
                .create_problem(NewProblem {
                    task_id: task.task_id,
                    problem_key: key.clone(),
                    content: content.clone(),
                })
                .await?;
            output(&problem, flags.format)
        }
        ProblemCommands::Get { id } => output(&ctx.service.get_problem(id).await?, flags.format),
        ProblemCommands::List { task } => {
            let task = ctx.service.find_task(task).await?;
            let counts = ctx.service.count_problems(&task.task_id).await?;
            let problems = ctx.service.list_problems(&task.task_id).await?;
            output(
                &ProblemListResponse {
                    task_id: task.task_id,
                    total: counts.total,
                    answered: counts.answered,
                    problems,
                },
                flags.format,
            )
        }
        ProblemCommands::Answer { id, undo } => {
            let problem = ctx.service.set_answered(id, !undo).await?;
            output(&problem, flags.format)
        }
        ProblemCommands::Delete { id } => {
            ctx.service.delete_problem(id).await?;
            output(
                &ProblemDeleteResponse {
                    id: id.clone(),
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
