mod create;
mod delete;
mod get;
mod list;
mod transition;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `pset task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            user,
            key,
            conversation,
            status,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    user: user.clone(),
                    key: key.clone(),
                    conversation: conversation.clone(),
                    status: status.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Update {
            id,
            title,
            user,
            conversation,
            status,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    user: user.clone(),
                    conversation: conversation.clone(),
                    status: status.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List {
            user,
            status,
            conversation,
            key,
            limit,
        } => {
            list::run(
                list::Params {
                    user: user.clone(),
                    status: status.clone(),
                    conversation: conversation.clone(),
                    key: key.clone(),
                    limit: *limit,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
        TaskCommands::Transition { id, status } => transition::run(id, status, ctx, flags).await,
    }
}
