use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

use super::{draw, ReaderState};
use crate::constants::window::IDLE_POLL_MS;
use crate::error::Result;
use crate::input::{command_for, KeySource, ReaderCommand};
use crate::orp::{format_for_speed_reading, RenderDescriptor};
use crate::style::HighlightStyle;

/// Holds the terminal handle and what is currently on screen.
///
/// The driving loop pushes words in with [`ReaderWindow::show`]; every update
/// redraws the frame.
pub struct ReaderWindow<B: Backend> {
    terminal: Terminal<B>,
    state: ReaderState,
}

impl<B: Backend> ReaderWindow<B> {
    /// Wrap an already initialised terminal.
    pub fn new(terminal: Terminal<B>, total: usize, style: HighlightStyle) -> Self {
        Self {
            terminal,
            state: ReaderState::new(total, style),
        }
    }

    /// Display a new word.
    pub fn show(&mut self, descriptor: RenderDescriptor) -> Result<()> {
        self.state.set_word(descriptor);
        self.redraw()
    }

    /// Draw the current state again.
    pub fn redraw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|f| draw(f, state))?;
        Ok(())
    }

    /// Pause or resume and redraw the status line.
    pub fn toggle_pause(&mut self) -> Result<()> {
        self.state.toggle_pause();
        tracing::debug!(paused = self.state.is_paused(), "Toggled pause");
        self.redraw()
    }

    /// Show the end-of-article status.
    pub fn finish(&mut self) -> Result<()> {
        self.state.finish();
        self.redraw()
    }

    /// Current display state.
    pub const fn state(&self) -> &ReaderState {
        &self.state
    }

    /// Access the underlying terminal (for cleanup).
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Feed `words` through the window, pausing `delay` after each one.
///
/// Returns the number of words shown. After the last word the window stays
/// open until the user quits.
pub fn run_reader<B: Backend, K: KeySource>(
    window: &mut ReaderWindow<B>,
    keys: &mut K,
    words: &[String],
    delay: Duration,
) -> Result<usize> {
    window.redraw()?;

    for word in words {
        let descriptor = match format_for_speed_reading(word) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("Skipping word after #{}: {e}", window.state().shown());
                continue;
            }
        };

        window.show(descriptor)?;
        if wait_between_words(window, keys, delay)? {
            tracing::info!("Reader closed after {} words", window.state().shown());
            return Ok(window.state().shown());
        }
    }

    window.finish()?;
    let idle = Duration::from_millis(IDLE_POLL_MS);
    loop {
        if let Some(key) = keys.next_key(idle)? {
            if command_for(&key) == ReaderCommand::Quit {
                break;
            }
        }
        window.redraw()?;
    }

    Ok(window.state().shown())
}

/// Wait out the per-word delay while handling keys. Returns `true` on quit.
fn wait_between_words<B: Backend, K: KeySource>(
    window: &mut ReaderWindow<B>,
    keys: &mut K,
    delay: Duration,
) -> Result<bool> {
    let deadline = Instant::now() + delay;
    let idle = Duration::from_millis(IDLE_POLL_MS);

    loop {
        let timeout = if window.state().is_paused() {
            idle
        } else {
            deadline.saturating_duration_since(Instant::now())
        };

        if let Some(key) = keys.next_key(timeout)? {
            match command_for(&key) {
                ReaderCommand::Quit => return Ok(true),
                ReaderCommand::TogglePause => window.toggle_pause()?,
                ReaderCommand::Ignored => {}
            }
        }

        if !window.state().is_paused() && Instant::now() >= deadline {
            return Ok(false);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::input::ScriptedKeys;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn window(total: usize) -> ReaderWindow<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        ReaderWindow::new(terminal, total, HighlightStyle::default())
    }

    fn key(c: char) -> Option<KeyEvent> {
        Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_reads_all_words_then_waits_for_quit() {
        let words = words(&["speed", "reading", "works"]);
        let mut win = window(words.len());
        let mut keys = ScriptedKeys::timeouts(3);

        let shown = run_reader(&mut win, &mut keys, &words, Duration::ZERO).unwrap();

        assert_eq!(shown, 3);
        assert_eq!(win.state().current().map(RenderDescriptor::word), Some("works"));
    }

    #[test]
    fn test_quit_mid_stream() {
        let words = words(&["one", "two", "three", "four"]);
        let mut win = window(words.len());
        let mut keys = ScriptedKeys::new([None, key('q')]);

        let shown = run_reader(&mut win, &mut keys, &words, Duration::ZERO).unwrap();

        assert_eq!(shown, 2);
        assert_eq!(win.state().current().map(RenderDescriptor::word), Some("two"));
    }

    #[test]
    fn test_empty_words_are_skipped() {
        let words = words(&["", "read", ""]);
        let mut win = window(words.len());
        let mut keys = ScriptedKeys::timeouts(1);

        let shown = run_reader(&mut win, &mut keys, &words, Duration::ZERO).unwrap();
        assert_eq!(shown, 1);
    }

    #[test]
    fn test_pause_holds_current_word() {
        let words = words(&["alpha", "beta"]);
        let mut win = window(words.len());
        // Pause on the first word, sit through two idle ticks, then quit.
        let mut keys = ScriptedKeys::new([key(' '), None, None, key('q')]);

        let shown = run_reader(&mut win, &mut keys, &words, Duration::ZERO).unwrap();

        assert_eq!(shown, 1);
        assert!(win.state().is_paused());
        assert_eq!(win.state().current().map(RenderDescriptor::word), Some("alpha"));
    }
}
