mod login;
mod logout;
mod status;

use pset_auth::LocalAuth;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `pset auth <subcommand>`.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags, auth: &LocalAuth) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, auth),
        AuthCommands::Logout => logout::handle(flags, auth),
        AuthCommands::Status => status::handle(flags, auth),
    }
}
