use std::borrow::Cow;

use thiserror::Error;

/// A classified line of user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// The end-of-data token
    Sentinel,
    /// A finite score value
    Score(f64),
}

/// Why a non-sentinel line was not admitted as a score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("not a finite number: {0:?}")]
    NotFinite(String),
}

/// Check whether a line is the sentinel token.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive.
pub fn is_sentinel(line: &str, sentinel: &str) -> bool {
    line.trim().to_lowercase() == sentinel.trim().to_lowercase()
}

/// Classify one line of input.
pub fn parse_entry(line: &str, sentinel: &str) -> Result<Entry, EntryError> {
    let trimmed = line.trim();
    if is_sentinel(trimmed, sentinel) {
        return Ok(Entry::Sentinel);
    }

    let value: f64 = strip_digit_separators(trimmed)
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| EntryError::NotANumber(trimmed.to_string()))?;

    // `inf` and `nan` spellings parse successfully but are never scores
    if !value.is_finite() {
        return Err(EntryError::NotFinite(trimmed.to_string()));
    }

    Ok(Entry::Score(value))
}

/// Remove `_` digit separators (`1_000` -> `1000`).
///
/// Every separator must sit between two ASCII digits; otherwise `None`.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }
    Some(Cow::Owned(stripped))
}
