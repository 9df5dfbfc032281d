//! Progressive `DD/MM/YYYY` masking of free-form keystroke text.

use std::fmt;

use serde::Serialize;
use tracing::trace;

/// Length of a fully typed `DD/MM/YYYY` string.
pub const MASKED_LEN: usize = 10;

const MAX_DIGITS: usize = 8;

/// Field content after masking.
///
/// Always matches `\d{0,2}(/\d{0,2}(/\d{0,4})?)?` and never exceeds
/// [`MASKED_LEN`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaskedDate(String);

impl MaskedDate {
    /// Masks the full current field content. Only the digits matter: every
    /// other character is dropped, a `/` follows the 2nd and 4th digit, and
    /// digits past the 8th are ignored.
    pub fn from_input(raw: &str) -> Self {
        let mut out = String::with_capacity(MASKED_LEN);
        for (i, c) in raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_DIGITS)
            .enumerate()
        {
            out.push(c);
            if i == 1 || i == 3 {
                out.push('/');
            }
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once day, month and a four digit year have been typed.
    pub fn is_complete(&self) -> bool {
        self.0.len() == MASKED_LEN
    }
}

impl fmt::Display for MaskedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MaskedDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Formatter pass for one input event: `raw` is the whole field, not a delta.
pub fn format_input(previous: &MaskedDate, raw: &str) -> MaskedDate {
    let next = MaskedDate::from_input(raw);
    if next == *previous {
        trace!(input = %next, "mask unchanged");
    } else {
        trace!(from = %previous, to = %next, "mask updated");
    }
    next
}
