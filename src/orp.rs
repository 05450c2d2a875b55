//! Optimal recognition point (ORP) formatting.
//!
//! Each word gets a fixation character (the first vowel inside a bounded scan
//! window) and enough leading spaces that the fixation character lands on the
//! same column for every word when rendered in a fixed-width font.

use std::fmt;
use thiserror::Error;

/// Vowels the scan looks for (compared case-insensitively).
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Words at or below this length are scanned from their first character.
const SHORT_WORD_MAX_LEN: usize = 3;

/// Returned when an empty string is passed to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input word cannot be empty")]
pub struct EmptyWordError;

/// How a single word should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderDescriptor {
    padded_text: String,
    fixation_index: usize,
    offset: usize,
}

impl RenderDescriptor {
    /// The word prefixed with `offset` spaces.
    pub fn padded_text(&self) -> &str {
        &self.padded_text
    }

    /// Character index of the fixation point within [`Self::padded_text`].
    pub const fn fixation_index(&self) -> usize {
        self.fixation_index
    }

    /// Number of spaces prepended to the word.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The word without its padding.
    pub fn word(&self) -> &str {
        &self.padded_text[self.offset..]
    }

    /// The character to highlight.
    pub fn fixation_char(&self) -> Option<char> {
        self.padded_text.chars().nth(self.fixation_index)
    }

    /// Split the padded text into the part before the fixation character,
    /// the fixation character itself, and the rest.
    pub fn split(&self) -> (&str, &str, &str) {
        let mut indices = self.padded_text.char_indices().skip(self.fixation_index);
        let (start, end) = match (indices.next(), indices.next()) {
            (Some((start, _)), Some((end, _))) => (start, end),
            (Some((start, _)), None) => (start, self.padded_text.len()),
            _ => (self.padded_text.len(), self.padded_text.len()),
        };

        (
            &self.padded_text[..start],
            &self.padded_text[start..end],
            &self.padded_text[end..],
        )
    }
}

impl fmt::Display for RenderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.padded_text)
    }
}

/// Format a word for speed reading.
///
/// Long words (more than three characters) never fixate on their first
/// character. The scan stops at the first vowel or just before the middle of
/// the word, whichever comes first, so words without vowels still get a
/// deterministic fixation point.
///
/// # Errors
///
/// Returns [`EmptyWordError`] when `word` is empty.
pub fn format_for_speed_reading(word: &str) -> Result<RenderDescriptor, EmptyWordError> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len == 0 {
        return Err(EmptyWordError);
    }

    let start = if len <= SHORT_WORD_MAX_LEN { 0 } else { 1 };
    let fixation = find_fixation(&chars, start);

    // Characters after the fixation point minus characters before it.
    // Never negative for this scan window.
    let after = len - fixation - 1;
    let offset = after.saturating_sub(fixation);

    let mut padded_text = " ".repeat(offset);
    padded_text.push_str(word);

    Ok(RenderDescriptor {
        padded_text,
        fixation_index: fixation + offset,
        offset,
    })
}

/// Scan from `start` for the first vowel, giving up at `mid - 1`.
fn find_fixation(chars: &[char], start: usize) -> usize {
    let mid = chars.len() / 2;
    let mut index = start;
    while index + 1 < mid && !is_vowel(chars[index]) {
        index += 1;
    }
    index
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}
