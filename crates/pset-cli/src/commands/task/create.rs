use chrono::Utc;
use pset_core::enums::TaskStatus;
use pset_core::ids;
use pset_db::repos::task::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::resolve_user_id;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub user: Option<String>,
    pub key: Option<String>,
    pub conversation: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = params
        .status
        .as_deref()
        .map(|s| parse_enum::<TaskStatus>(s, "status"))
        .transpose()?;
    let user_id = resolve_user_id(ctx, params.user.as_deref()).await?;

    let millis = Utc::now().timestamp_millis();
    let task = ctx
        .service
        .create_task(NewTask {
            task_id: params.key.unwrap_or_else(|| ids::task_key(millis)),
            title: params.title,
            user_id,
            conversation_id: params
                .conversation
                .unwrap_or_else(|| ids::conversation_id(millis)),
            status,
        })
        .await?;
    output(&task, flags.format)
}
