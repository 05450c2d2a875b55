//! Reader window.
//!
//! A full-screen ratatui view that shows one word at a time inside a fixed
//! width panel, with markers above and below the fixation column.

mod window;

pub use window::{run_reader, ReaderWindow};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::window::{MARKER, PANEL_HEIGHT, PANEL_WIDTH};
use crate::orp::RenderDescriptor;
use crate::style::HighlightStyle;

/// Everything the reader window needs to draw a frame.
#[derive(Debug, Clone, Default)]
pub struct ReaderState {
    current: Option<RenderDescriptor>,
    shown: usize,
    total: usize,
    paused: bool,
    finished: bool,
    style: HighlightStyle,
}

impl ReaderState {
    /// Empty state for a run of `total` words.
    pub fn new(total: usize, style: HighlightStyle) -> Self {
        Self {
            total,
            style,
            ..Self::default()
        }
    }

    /// Replace the displayed word.
    pub fn set_word(&mut self, descriptor: RenderDescriptor) {
        self.current = Some(descriptor);
        self.shown += 1;
    }

    /// The word currently on screen.
    pub const fn current(&self) -> Option<&RenderDescriptor> {
        self.current.as_ref()
    }

    /// Number of words displayed so far.
    pub const fn shown(&self) -> usize {
        self.shown
    }

    /// Whether the word stream is paused.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Mark the run as complete.
    pub fn finish(&mut self) {
        self.finished = true;
        self.paused = false;
    }
}

/// Render the reader panel to the terminal frame.
pub fn draw(f: &mut Frame, state: &ReaderState) {
    let size = f.size();
    let width = (PANEL_WIDTH + 2).min(size.width);
    let height = PANEL_HEIGHT.min(size.height);
    let area = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" speedread ", Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let center = usize::from(inner.width) / 2;
    let marker_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let marker = || {
        Paragraph::new(Line::from(vec![
            Span::raw(" ".repeat(center)),
            Span::styled(MARKER, marker_style),
        ]))
    };

    let rows = (0..inner.height.min(5))
        .map(|i| Rect { y: inner.y + i, height: 1, ..inner })
        .collect::<Vec<_>>();

    f.render_widget(marker(), rows[0]);
    if let Some(row) = rows.get(1) {
        if let Some(descriptor) = state.current() {
            f.render_widget(Paragraph::new(word_line(descriptor, center, &state.style)), *row);
        }
    }
    if let Some(row) = rows.get(2) {
        f.render_widget(marker(), *row);
    }
    if let Some(row) = rows.get(4) {
        let status = Paragraph::new(status_text(state))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(status, *row);
    }
}

/// Build the styled line for a word so its fixation character lands on
/// column `center`.
pub fn word_line<'a>(descriptor: &'a RenderDescriptor, center: usize, style: &HighlightStyle) -> Line<'a> {
    let (before, fixation, after) = descriptor.split();
    let idx = descriptor.fixation_index();

    // Words too long for the panel lose characters off the left edge.
    let skip = idx.saturating_sub(center);
    let before: String = before.chars().skip(skip).collect();
    let lead = center.saturating_sub(idx);

    let word_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut fixation_style = word_style.fg(style.color.to_ratatui());
    if style.underline {
        fixation_style = fixation_style.add_modifier(Modifier::UNDERLINED);
    }

    Line::from(vec![
        Span::raw(" ".repeat(lead)),
        Span::styled(before, word_style),
        Span::styled(fixation, fixation_style),
        Span::styled(after, word_style),
    ])
}

fn status_text(state: &ReaderState) -> String {
    if state.finished {
        format!("done - {} words - q to quit", state.shown)
    } else if state.paused {
        format!("paused at {}/{} - space to resume", state.shown, state.total)
    } else {
        format!("{}/{} - space pause - q quit", state.shown, state.total)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::orp::format_for_speed_reading;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer.get(x, y).symbol()).collect()
    }

    fn render(state: &ReaderState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_word_line_aligns_fixation_to_center() {
        let style = HighlightStyle::default();
        for word in ["cat", "rhythm", "elephant"] {
            let desc = format_for_speed_reading(word).unwrap();
            let line = word_line(&desc, 25, &style);
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert_eq!(text.chars().nth(25), desc.fixation_char(), "word {word}");
        }
    }

    #[test]
    fn test_word_line_long_word_is_clipped_left() {
        let desc = format_for_speed_reading("pneumonoultramicroscopicsilicovolcanoconiosis").unwrap();
        let line = word_line(&desc, 4, &HighlightStyle::default());
        assert_eq!(line.spans[0].content, "");
        assert_eq!(line.spans[1].content.chars().count(), 4);
        assert_eq!(line.spans[2].content.chars().next(), desc.fixation_char());
    }

    #[test]
    fn test_draw_places_markers_and_word() {
        let mut state = ReaderState::new(3, HighlightStyle::default());
        state.set_word(format_for_speed_reading("elephant").unwrap());
        let buffer = render(&state);

        // Panel is 52 wide on a 60 wide screen: x = 4, inner x = 5, center 25.
        let marker_x = 5 + 25;
        assert_eq!(buffer.get(marker_x, 2).symbol(), "|");
        assert_eq!(buffer.get(marker_x, 4).symbol(), "|");
        assert_eq!(buffer.get(marker_x, 3).symbol(), "e");
        assert_eq!(buffer.get(marker_x, 3).fg, Color::LightRed);
        assert!(row_text(&buffer, 3).contains("elephant"));
        assert!(row_text(&buffer, 6).contains("1/3"));
    }

    #[test]
    fn test_status_reflects_pause_and_finish() {
        let mut state = ReaderState::new(2, HighlightStyle::default());
        state.toggle_pause();
        assert!(status_text(&state).starts_with("paused"));

        state.finish();
        assert!(!state.is_paused());
        assert!(status_text(&state).starts_with("done"));
    }
}
