use pset_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let to = parse_enum::<TaskStatus>(status, "status")?;
    let task = ctx.service.find_task(id).await?;

    if !task.status.can_transition_to(to) {
        let allowed = task
            .status
            .allowed_next_states()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>();
        anyhow::bail!(
            "task {} cannot move from {} to {to} (allowed: {})",
            task.task_id,
            task.status,
            if task.status.is_terminal() {
                "none, status is terminal".to_string()
            } else {
                allowed.join(", ")
            }
        );
    }

    let response = ctx.service.transition_task(&task.id, to).await?;
    output(&response, flags.format)
}
