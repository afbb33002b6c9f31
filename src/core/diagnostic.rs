//! Diagnostic synthesis for failed validation
//!
//! Every failed validation attempt produces exactly one [`Diagnostic`]:
//! a user-facing message, the 1-based source line when the failure
//! position is known, and a remediation hint. Syntax failures are
//! classified by reading the offending token out of the source text at
//! the parser's reported position; semantic failures carry the failing
//! check's message and nothing else.

use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// Structured, user-facing description of why configuration text
/// failed validation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable failure message
    pub message: String,

    /// 1-based line of the failure, when the source position is known
    pub line: Option<usize>,

    /// Remediation hint
    pub details: Option<String>,
}

impl Diagnostic {
    /// Classify a parse failure against the text it came from.
    ///
    /// The parser's line/column is converted to a byte offset and the
    /// token at that offset decides the message: a closing `]` or `}`
    /// right after a comma is the trailing-comma case, any other token
    /// is reported as unexpected, and no token at all falls back to a
    /// generic syntax error. Truncated input takes the generic path
    /// directly; the parser's position for it points at the last byte
    /// it managed to read, not at anything offending.
    pub(crate) fn syntax(err: &serde_json::Error, text: &str) -> Self {
        let offset = offset_of(text, err.line(), err.column());
        let line = Some(line_of_offset(text, offset));

        let token = if err.is_eof() {
            None
        } else {
            token_at(text, offset)
        };

        match token.as_deref() {
            Some("]") => Diagnostic {
                message: "extra comma before the closing bracket ']'".to_string(),
                line,
                details: Some(
                    "remove the trailing comma after the last item in your array".to_string(),
                ),
            },
            Some("}") => Diagnostic {
                message: "extra comma before the closing brace '}'".to_string(),
                line,
                details: Some("remove the trailing comma after the last property".to_string()),
            },
            Some(token) => Diagnostic {
                message: format!("Unexpected {token} found"),
                line,
                details: Some(
                    "check for missing or extra commas, quotes, or brackets".to_string(),
                ),
            },
            None => Diagnostic {
                message: "Syntax Error".to_string(),
                line,
                details: Some(
                    "check for proper formatting: missing commas, quotes, or brackets".to_string(),
                ),
            },
        }
    }

    /// A failed semantic check: the check's message, no position, no hint
    pub(crate) fn semantic(err: ConfigError) -> Self {
        Diagnostic {
            message: err.to_string(),
            line: None,
            details: None,
        }
    }

    /// Any other failure: the underlying message verbatim
    pub(crate) fn unclassified(err: &dyn std::error::Error) -> Self {
        Diagnostic {
            message: err.to_string(),
            line: None,
            details: Some("ensure your configuration is properly formatted".to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " (Line: {line})")?;
        }
        Ok(())
    }
}

/// Byte offset of a 1-based line/column position.
///
/// Columns are byte-based, matching how the parser counts them. A
/// position past the end of the text saturates to the text length.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let mut start = 0;
    let mut current = 1;
    for chunk in text.split_inclusive('\n') {
        if current == line {
            break;
        }
        start += chunk.len();
        current += 1;
    }
    (start + column.saturating_sub(1)).min(text.len())
}

/// 1-based line of a byte offset: newlines before the offset, plus one
fn line_of_offset(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// First token-like substring at or after the offset.
///
/// Structural punctuation is a token by itself; anything else runs
/// until whitespace or punctuation. Returns `None` when only
/// whitespace (or nothing) remains, or when the offset does not land
/// on a character boundary.
fn token_at(text: &str, offset: usize) -> Option<String> {
    let rest = text.get(offset..)?.trim_start();
    let first = rest.chars().next()?;
    if matches!(first, '{' | '}' | '[' | ']' | ',' | ':') {
        return Some(first.to_string());
    }
    let token: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace() && !matches!(c, '{' | '}' | '[' | ']' | ',' | ':'))
        .take(20)
        .collect();
    Some(token)
}
