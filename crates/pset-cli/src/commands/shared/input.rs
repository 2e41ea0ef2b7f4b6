use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::cli::subcommands::PayloadInput;

/// Read the payload from the given file, or stdin for `-` / no path.
pub fn read_payload(input: &PayloadInput) -> anyhow::Result<String> {
    match input.path.as_deref() {
        None | Some("-") => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read payload from stdin")?;
            Ok(raw)
        }
        Some(path) => read_payload_file(Path::new(path)),
    }
}

fn read_payload_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload file {}", path.display()))
}
