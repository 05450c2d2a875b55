//! ANSI highlighting for terminal output.
//!
//! Everything here is a pure function of its arguments; no escape-code state
//! is kept between calls.

use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::orp::RenderDescriptor;

/// Control Sequence Introducer.
const CSI: &str = "\x1b[";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Foreground colors available for the fixation character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    /// Bright red (the classic look).
    #[default]
    Red,
    /// Bright green.
    Green,
    /// Bright yellow.
    Yellow,
    /// Bright blue.
    Blue,
    /// Bright magenta.
    Magenta,
    /// Bright cyan.
    Cyan,
    /// Bright white.
    White,
}

impl HighlightColor {
    /// SGR parameter for the bright foreground variant of this color.
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::Red => 91,
            Self::Green => 92,
            Self::Yellow => 93,
            Self::Blue => 94,
            Self::Magenta => 95,
            Self::Cyan => 96,
            Self::White => 97,
        }
    }

    /// Matching ratatui color for the reader window.
    #[must_use]
    pub const fn to_ratatui(self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Red => Color::LightRed,
            Self::Green => Color::LightGreen,
            Self::Yellow => Color::LightYellow,
            Self::Blue => Color::LightBlue,
            Self::Magenta => Color::LightMagenta,
            Self::Cyan => Color::LightCyan,
            Self::White => Color::White,
        }
    }
}

impl FromStr for HighlightColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            other => Err(format!("unknown color '{other}'")),
        }
    }
}

/// Style applied to highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Foreground color.
    pub color: HighlightColor,
    /// Underline the highlighted text.
    pub underline: bool,
    /// Render the highlighted text bold.
    pub bold: bool,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: HighlightColor::default(),
            underline: true,
            bold: false,
        }
    }
}

impl HighlightStyle {
    /// Default style with a different color.
    #[must_use]
    pub fn with_color(color: HighlightColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Escape sequence that switches this style on.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut seq = format!("{CSI}{}m", self.color.sgr_code());
        if self.bold {
            seq.push_str(CSI);
            seq.push_str("1m");
        }
        if self.underline {
            seq.push_str(CSI);
            seq.push_str("4m");
        }
        seq
    }
}

/// Wrap the characters of `text` in `range` (character indices) with `style`.
///
/// The range is clamped to the text; an empty range leaves the text untouched.
pub fn highlight(text: &str, range: Range<usize>, style: &HighlightStyle) -> String {
    let char_count = text.chars().count();
    let end = range.end.min(char_count);
    let start = range.start.min(end);
    if start == end {
        return text.to_string();
    }

    let byte_at = |idx: usize| {
        text.char_indices()
            .nth(idx)
            .map_or(text.len(), |(byte, _)| byte)
    };
    let (start_byte, end_byte) = (byte_at(start), byte_at(end));

    format!(
        "{}{}{}{RESET}{}",
        &text[..start_byte],
        style.prefix(),
        &text[start_byte..end_byte],
        &text[end_byte..],
    )
}

/// Highlight the fixation character of a formatted word.
pub fn highlight_fixation(descriptor: &RenderDescriptor, style: &HighlightStyle) -> String {
    let idx = descriptor.fixation_index();
    highlight(descriptor.padded_text(), idx..idx + 1, style)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::orp::format_for_speed_reading;

    #[test]
    fn test_default_style_is_red_underline() {
        let style = HighlightStyle::default();
        assert_eq!(style.prefix(), "\x1b[91m\x1b[4m");
    }

    #[test]
    fn test_highlight_middle_char() {
        let out = highlight("cat", 1..2, &HighlightStyle::default());
        assert_eq!(out, "c\x1b[91m\x1b[4ma\x1b[0mt");
    }

    #[test]
    fn test_highlight_empty_range_is_noop() {
        assert_eq!(highlight("cat", 2..2, &HighlightStyle::default()), "cat");
        assert_eq!(highlight("cat", 5..9, &HighlightStyle::default()), "cat");
    }

    #[test]
    fn test_highlight_clamps_range() {
        let style = HighlightStyle::with_color(HighlightColor::Green);
        let out = highlight("cat", 2..10, &style);
        assert_eq!(out, "ca\x1b[92m\x1b[4mt\x1b[0m");
    }

    #[test]
    fn test_bold_style() {
        let style = HighlightStyle {
            color: HighlightColor::Cyan,
            underline: false,
            bold: true,
        };
        assert_eq!(style.prefix(), "\x1b[96m\x1b[1m");
    }

    #[test]
    fn test_highlight_fixation() {
        let desc = format_for_speed_reading("rhythm").unwrap();
        let out = highlight_fixation(&desc, &HighlightStyle::default());
        assert_eq!(out, " rh\x1b[91m\x1b[4my\x1b[0mthm");
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("Magenta".parse::<HighlightColor>(), Ok(HighlightColor::Magenta));
        assert!("purple".parse::<HighlightColor>().is_err());
    }
}
