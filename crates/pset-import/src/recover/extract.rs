//! Pattern-based extraction for payloads no repair can turn into JSON.
//!
//! Both scans work on the raw input and ignore its overall structure. Values
//! are taken verbatim; only the later `\n` normalization touches them.

use std::sync::LazyLock;

use regex::Regex;

use super::RecoveredFields;

/// `"content<digits>": "<no quotes>"`.
static CONTENT_PAIR: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#""content([0-9]+)"\s*:\s*"([^"]*)""#));

/// Looser form: junk allowed between key and colon and between colon and
/// value; the value may contain backslash escapes, including `\"`.
static CONTENT_PAIR_LOOSE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#""(content[0-9]+)"[^:]*:[^"]*"((?:[^"\\]|\\.)*?)""#));

fn pattern(
    cell: &'static LazyLock<Result<Regex, regex::Error>>,
    name: &str,
) -> Option<&'static Regex> {
    match cell.as_ref() {
        Ok(re) => Some(re),
        Err(error) => {
            tracing::warn!(%error, pattern = name, "extraction pattern unavailable");
            None
        }
    }
}

/// Collect every strict `"contentN": "..."` pair. Later duplicates win.
#[must_use]
pub fn scan_pairs(raw: &str) -> Option<RecoveredFields> {
    let re = pattern(&CONTENT_PAIR, "content_pair")?;
    let fields: RecoveredFields = re
        .captures_iter(raw)
        .filter_map(|caps| {
            let index = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str();
            Some((format!("content{index}"), value.to_string()))
        })
        .collect();
    (!fields.is_empty()).then_some(fields)
}

/// Collect every loose `"contentN" ... : ... "..."` pair. Later duplicates win.
#[must_use]
pub fn reconstruct_pairs(raw: &str) -> Option<RecoveredFields> {
    let re = pattern(&CONTENT_PAIR_LOOSE, "content_pair_loose")?;
    let fields: RecoveredFields = re
        .captures_iter(raw)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str();
            Some((key.to_string(), value.to_string()))
        })
        .collect();
    (!fields.is_empty()).then_some(fields)
}
