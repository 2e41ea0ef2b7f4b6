//! Best-effort recovery of `content<N>` problem entries from pasted payloads.
//!
//! The payload should be a JSON object such as
//! `{"content1": "...", "content2": "..."}`, but pasted text often is not:
//! braces go missing, LaTeX backslashes are left unescaped, keys lose their
//! quotes. Recovery walks an ordered table of strategies and takes the first
//! one that yields at least one `content<digits>` key:
//!
//! 1. strict JSON parse of the input,
//! 2. strict parse after [`repair`],
//! 3. a scan for `"contentN": "..."` pairs,
//! 4. a looser scan tolerating escapes and junk around the colon.
//!
//! Every strategy is a pure function of the input; the only side effects are
//! `tracing` debug events.

pub mod entries;
pub mod extract;
pub mod repair;

use std::collections::BTreeMap;

use pset_core::entities::ProblemEntry;
use pset_core::enums::RecoveryMethod;
use pset_core::responses::ImportPreview;

use crate::error::ImportError;

pub use repair::repair;

/// Key → raw value pairs produced by one strategy. Inserting a key twice
/// keeps the later value.
pub type RecoveredFields = BTreeMap<String, String>;

type Strategy = fn(&str) -> Option<RecoveredFields>;

const STRATEGIES: [(RecoveryMethod, Strategy); 4] = [
    (RecoveryMethod::Direct, direct_parse),
    (RecoveryMethod::Preprocessed, preprocessed_parse),
    (RecoveryMethod::RegexExtraction, extract::scan_pairs),
    (RecoveryMethod::Reconstructed, extract::reconstruct_pairs),
];

/// Entries recovered from one payload and the strategy that found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub method: RecoveryMethod,
    pub entries: Vec<ProblemEntry>,
}

impl From<Recovery> for ImportPreview {
    fn from(recovery: Recovery) -> Self {
        Self {
            method: recovery.method,
            count: recovery.entries.len(),
            entries: recovery.entries,
        }
    }
}

/// Run the strategy chain over `raw`.
///
/// # Errors
///
/// Returns `ImportError::NoRecoverableContent` for blank input or when no
/// strategy yields a `content<digits>` key.
pub fn recover(raw: &str) -> Result<Recovery, ImportError> {
    if raw.trim().is_empty() {
        tracing::debug!("payload is blank");
        return Err(ImportError::NoRecoverableContent);
    }

    for (method, strategy) in STRATEGIES {
        match strategy(raw) {
            Some(fields) if entries::has_content_key(&fields) => {
                let entries = entries::to_entries(fields);
                tracing::debug!(%method, count = entries.len(), "recovered entries");
                return Ok(Recovery { method, entries });
            }
            Some(fields) => {
                tracing::debug!(%method, keys = fields.len(), "no content keys in result");
            }
            None => tracing::debug!(%method, "step failed"),
        }
    }

    Err(ImportError::NoRecoverableContent)
}

fn direct_parse(raw: &str) -> Option<RecoveredFields> {
    parse_object(raw)
}

fn preprocessed_parse(raw: &str) -> Option<RecoveredFields> {
    parse_object(&repair(raw))
}

/// Strict parse into an object; string values as-is, anything else as its
/// compact JSON text.
fn parse_object(text: &str) -> Option<RecoveredFields> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "strict parse failed");
            return None;
        }
    };
    let serde_json::Value::Object(map) = value else {
        tracing::debug!("parsed JSON is not an object");
        return None;
    };
    Some(
        map.into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect(),
    )
}
