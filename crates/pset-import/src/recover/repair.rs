//! Textual repairs applied before the second parse attempt.
//!
//! Each repair is a heuristic over raw text, not a JSON grammar: it fixes the
//! common damage in pasted problem sets (missing braces, LaTeX backslashes,
//! bare keys) and can over-correct text that was already fine.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BARE_KEY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z0-9_]+)(\s*:)"));

/// Apply every repair in order: braces, LaTeX brackets, lone backslashes,
/// bare keys.
#[must_use]
pub fn repair(raw: &str) -> String {
    let wrapped = wrap_braces(raw);
    let brackets = escape_latex_brackets(&wrapped);
    let backslashes = double_lone_backslashes(&brackets);
    let repaired = quote_bare_keys(&backslashes).into_owned();
    tracing::debug!(
        before = raw.len(),
        after = repaired.len(),
        "repaired payload text"
    );
    repaired
}

/// Trim, then add `{` / `}` where the text does not already start / end with one.
#[must_use]
pub fn wrap_braces(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('{') {
        out.push('{');
    }
    out.push_str(trimmed);
    if !trimmed.ends_with('}') {
        out.push('}');
    }
    out
}

/// `\[` → `\\[` and `\]` → `\\]`.
#[must_use]
pub fn escape_latex_brackets(text: &str) -> String {
    text.replace(r"\[", r"\\[").replace(r"\]", r"\\]")
}

/// Double every backslash that is neither preceded by a backslash nor
/// followed by a backslash or double quote.
///
/// Neighbours are judged on the input text, so a run like `\\` is left alone
/// and `\"` keeps escaping its quote.
#[must_use]
pub fn double_lone_backslashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c != '\\' {
            continue;
        }
        let after_backslash = i > 0 && chars[i - 1] == '\\';
        let before_escape = matches!(chars.get(i + 1), Some('\\' | '"'));
        if !after_backslash && !before_escape {
            out.push('\\');
        }
    }
    out
}

/// Quote identifier-like keys directly after `{` or `,`: `{a: 1}` → `{"a": 1}`.
#[must_use]
pub fn quote_bare_keys(text: &str) -> Cow<'_, str> {
    match BARE_KEY.as_ref() {
        Ok(re) => re.replace_all(text, r#"${1}"${2}"${3}"#),
        Err(error) => {
            tracing::warn!(%error, "bare key pattern unavailable, skipping key quoting");
            Cow::Borrowed(text)
        }
    }
}
