use pset_config::ImportConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PayloadInput;
use crate::commands::shared::input::read_payload;
use crate::output::output;

pub fn run(input: &PayloadInput, config: &ImportConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_payload(input)?;
    let preview = pset_import::preview(&raw, config)?;
    output(&preview, flags.format)
}
