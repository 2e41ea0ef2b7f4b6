mod check;
mod preview;
mod repair;
mod run;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImportCommands;
use crate::context::AppContext;

/// Handle the payload-only `pset import` commands, which need no database.
pub fn handle_offline(
    action: &ImportCommands,
    config: &pset_config::PsetConfig,
    flags: &GlobalFlags,
) -> Option<anyhow::Result<()>> {
    match action {
        ImportCommands::Preview(input) => Some(preview::run(input, &config.import, flags)),
        ImportCommands::Check(input) => Some(check::run(input, flags)),
        ImportCommands::Repair(input) => Some(repair::run(input)),
        ImportCommands::Run(_) => None,
    }
}

/// Handle `pset import run`.
pub async fn handle(
    action: &ImportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ImportCommands::Run(args) => run::run(args, ctx, flags).await,
        ImportCommands::Preview(_) | ImportCommands::Check(_) | ImportCommands::Repair(_) => {
            unreachable!("payload-only import commands are pre-dispatched in main")
        }
    }
}
