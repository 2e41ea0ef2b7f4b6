use pset_core::enums::TaskStatus;
use pset_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub user: Option<String>,
    pub conversation: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(user) = params.user {
        builder = builder.user_id(user);
    }
    if let Some(conversation) = params.conversation {
        builder = builder.conversation_id(conversation);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum::<TaskStatus>(status, "status")?);
    }

    let current = ctx.service.find_task(&params.id).await?;
    let task = ctx.service.update_task(&current.id, builder.build()).await?;
    output(&task, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.user.is_none()
        && params.conversation.is_none()
        && params.status.is_none()
    {
        anyhow::bail!("At least one of --title, --user, --conversation, or --status must be provided");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, validate_update_params};

    fn params() -> Params {
        Params {
            id: String::from("tsk-1"),
            title: None,
            user: None,
            conversation: None,
            status: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&params()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let params = Params {
            status: Some(String::from("cancelled")),
            ..params()
        };
        assert!(validate_update_params(&params).is_ok());
    }
}
