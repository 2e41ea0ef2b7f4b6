//! Turning recovered fields into ordered `ProblemEntry` values.

use std::cmp::Ordering;

use pset_core::entities::ProblemEntry;

use super::RecoveredFields;

const CONTENT_KEY_PREFIX: &str = "content";

/// The digit suffix of a `content<digits>` key.
#[must_use]
pub fn content_index(key: &str) -> Option<&str> {
    let suffix = key.strip_prefix(CONTENT_KEY_PREFIX)?;
    (!suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())).then_some(suffix)
}

/// Whether any key is a `content<digits>` key.
#[must_use]
pub fn has_content_key(fields: &RecoveredFields) -> bool {
    fields.keys().any(|k| content_index(k).is_some())
}

/// Replace literal two-character `\n` sequences with newlines, then trim.
#[must_use]
pub fn normalize_content(value: &str) -> String {
    value.replace(r"\n", "\n").trim().to_string()
}

/// Compare digit strings by numeric magnitude without parsing them.
#[must_use]
pub fn compare_indices(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Build entries from every `content<digits>` field, sorted by index.
///
/// Other keys (including `content` with a non-numeric suffix) are skipped.
/// Empty content is kept.
#[must_use]
pub fn to_entries(fields: RecoveredFields) -> Vec<ProblemEntry> {
    let mut entries: Vec<ProblemEntry> = fields
        .into_iter()
        .filter_map(|(key, value)| {
            let Some(index) = content_index(&key) else {
                if key.starts_with(CONTENT_KEY_PREFIX) {
                    tracing::debug!(%key, "skipping content key without a numeric suffix");
                }
                return None;
            };
            Some(ProblemEntry {
                index: index.to_string(),
                content: normalize_content(&value),
                key,
            })
        })
        .collect();

    entries.sort_by(|a, b| compare_indices(&a.index, &b.index).then_with(|| a.key.cmp(&b.key)));
    entries
}
