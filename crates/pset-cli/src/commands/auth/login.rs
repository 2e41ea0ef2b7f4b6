use chrono::{DateTime, Utc};
use pset_auth::LocalAuth;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    anonymous: bool,
    expires_at: DateTime<Utc>,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags, auth: &LocalAuth) -> anyhow::Result<()> {
    let session = auth.login(args.user.as_deref())?;
    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.user_id,
            anonymous: session.anonymous,
            expires_at: session.expires_at,
        },
        flags.format,
    )
}
