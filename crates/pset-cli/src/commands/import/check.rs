use serde::Serialize;

use pset_import::{FormatIssue, FormatReport};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PayloadInput;
use crate::commands::shared::input::read_payload;
use crate::output::output;

#[derive(Serialize)]
struct CheckResponse {
    well_formed: bool,
    length: usize,
    issues: Vec<IssueRow>,
}

#[derive(Serialize)]
struct IssueRow {
    position: Option<usize>,
    message: String,
}

impl From<FormatReport> for CheckResponse {
    fn from(report: FormatReport) -> Self {
        let last = report.length.saturating_sub(1);
        Self {
            well_formed: report.is_well_formed(),
            length: report.length,
            issues: report
                .issues
                .iter()
                .map(|issue| IssueRow {
                    position: match issue {
                        FormatIssue::UnexpectedCharacter { position, .. } => Some(*position),
                        FormatIssue::MissingOpeningBrace { found: Some(_) } => Some(0),
                        FormatIssue::MissingClosingBrace { found: Some(_) } => Some(last),
                        _ => None,
                    },
                    message: issue.to_string(),
                })
                .collect(),
        }
    }
}

/// Advisory only: exits zero even when issues are found.
pub fn run(input: &PayloadInput, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_payload(input)?;
    output(&CheckResponse::from(pset_import::diagnose(&raw)), flags.format)
}
