//! Character-level structure check for import payloads.
//!
//! Purely advisory: recovery runs regardless of what the report says. The
//! scan tracks string state (with backslash escapes) and flags anything
//! outside a string other than `{ } , :` and whitespace.

use std::fmt;

use serde::Serialize;

/// Characters of context shown on each side of an unexpected character.
const CONTEXT_RADIUS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum FormatIssue {
    MissingOpeningBrace { found: Option<char> },
    MissingClosingBrace { found: Option<char> },
    UnterminatedString,
    UnexpectedCharacter {
        /// Character offset in the trimmed payload.
        position: usize,
        character: char,
        context: String,
    },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOpeningBrace { found } => match found {
                Some(c) => write!(f, "expected '{{' at the start, found '{c}'"),
                None => f.write_str("expected '{' at the start, payload is empty"),
            },
            Self::MissingClosingBrace { found } => match found {
                Some(c) => write!(f, "expected '}}' at the end, found '{c}'"),
                None => f.write_str("expected '}' at the end, payload is empty"),
            },
            Self::UnterminatedString => f.write_str("string is not closed (missing '\"')"),
            Self::UnexpectedCharacter {
                position,
                character,
                context,
            } => write!(
                f,
                "unexpected '{character}' outside a string at {position} (near \"{context}\")"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    /// Length of the trimmed payload, in characters.
    pub length: usize,
    pub issues: Vec<FormatIssue>,
}

impl FormatReport {
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scan the trimmed payload and report structural problems.
#[must_use]
pub fn diagnose(raw: &str) -> FormatReport {
    let chars: Vec<char> = raw.trim().chars().collect();
    let mut issues = Vec::new();

    let first = chars.first().copied();
    let last = chars.last().copied();
    if first != Some('{') {
        issues.push(FormatIssue::MissingOpeningBrace { found: first });
    }
    if last != Some('}') {
        issues.push(FormatIssue::MissingClosingBrace { found: last });
    }

    let mut inside_string = false;
    let mut escaped = false;
    for (position, &character) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match character {
            '\\' => escaped = true,
            '"' => inside_string = !inside_string,
            _ if inside_string => {}
            '{' | '}' | ',' | ':' => {}
            c if c.is_whitespace() => {}
            _ => {
                let start = position.saturating_sub(CONTEXT_RADIUS);
                let end = (position + CONTEXT_RADIUS).min(chars.len());
                issues.push(FormatIssue::UnexpectedCharacter {
                    position,
                    character,
                    context: chars[start..end].iter().collect(),
                });
            }
        }
    }

    if inside_string {
        issues.push(FormatIssue::UnterminatedString);
    }

    tracing::debug!(issues = issues.len(), "format check finished");
    FormatReport {
        length: chars.len(),
        issues,
    }
}
