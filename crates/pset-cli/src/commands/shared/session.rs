use pset_auth::SessionProvider;

use crate::context::AppContext;

/// Owner for a new record: the explicit `--user`, else the session's user
/// (signing in anonymously when allowed).
pub async fn resolve_user_id(ctx: &AppContext, explicit: Option<&str>) -> anyhow::Result<String> {
    if let Some(user) = explicit {
        let user = user.trim();
        if user.is_empty() {
            anyhow::bail!("--user must not be empty");
        }
        return Ok(user.to_string());
    }

    let session = ctx
        .auth
        .ensure_session()
        .await
        .map_err(|error| anyhow::anyhow!("{error}. Run 'pset auth login' or pass --user."))?;
    Ok(session.user_id)
}
