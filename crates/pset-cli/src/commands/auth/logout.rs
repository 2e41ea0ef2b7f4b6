use pset_auth::LocalAuth;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags, auth: &LocalAuth) -> anyhow::Result<()> {
    let cleared = auth.logout()?;
    output(&AuthLogoutResponse { cleared }, flags.format)
}
