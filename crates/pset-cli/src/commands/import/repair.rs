use crate::cli::subcommands::PayloadInput;
use crate::commands::shared::input::read_payload;
use crate::output::output_text;

/// Print the repaired text as-is, so it can be piped back into `import run`.
pub fn run(input: &PayloadInput) -> anyhow::Result<()> {
    let raw = read_payload(input)?;
    output_text(&pset_import::repair(&raw));
    Ok(())
}
