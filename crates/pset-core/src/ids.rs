//! ID prefix constants for store-assigned identifiers.
//!
//! IDs are generated by the database as `{prefix}-{8 hex chars}`.

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_PROBLEM: &str = "prb";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_TASK, PREFIX_PROBLEM];

/// Prefix of caller-facing task keys (`task_<unix millis>`).
pub const TASK_KEY_PREFIX: &str = "task_";

/// Prefix of conversation ids assigned on import (`conv_<unix millis>`).
pub const CONVERSATION_PREFIX: &str = "conv_";

/// Build a caller-facing task key from a millisecond timestamp.
#[must_use]
pub fn task_key(millis: i64) -> String {
    format!("{TASK_KEY_PREFIX}{millis}")
}

/// Build a conversation id from a millisecond timestamp.
#[must_use]
pub fn conversation_id(millis: i64) -> String {
    format!("{CONVERSATION_PREFIX}{millis}")
}

/// Return the prefix of a store-assigned id, if it carries a known one.
#[must_use]
pub fn known_prefix(id: &str) -> Option<&'static str> {
    let (prefix, rest) = id.split_once('-')?;
    if rest.is_empty() {
        return None;
    }
    ALL_PREFIXES.iter().copied().find(|p| *p == prefix)
}
