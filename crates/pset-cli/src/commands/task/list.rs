use pset_core::entities::TaskFilter;
use pset_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub user: Option<String>,
    pub status: Option<String>,
    pub conversation: Option<String>,
    pub key: Option<String>,
    pub limit: Option<u32>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(&params)?;
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);
    let tasks = ctx.service.list_tasks(&filter, limit).await?;
    output(&tasks, flags.format)
}

fn build_filter(params: &Params) -> anyhow::Result<TaskFilter> {
    Ok(TaskFilter {
        id: None,
        task_id: params.key.clone(),
        user_id: params.user.clone(),
        status: params
            .status
            .as_deref()
            .map(|s| parse_enum::<TaskStatus>(s, "status"))
            .transpose()?,
        conversation_id: params.conversation.clone(),
    })
}
