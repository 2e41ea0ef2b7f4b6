use pset_auth::LocalAuth;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Report the stored session; never signs in.
pub fn handle(flags: &GlobalFlags, auth: &LocalAuth) -> anyhow::Result<()> {
    output(&auth.status(), flags.format)
}
