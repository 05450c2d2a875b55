//! Input handling abstractions.
//!
//! The reader window asks a [`KeySource`] for key presses between words, so
//! the driving loop can be tested with scripted keys instead of a real
//! terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Result;

/// What a key press asks the reader to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderCommand {
    /// Stop reading and close the window.
    Quit,
    /// Pause or resume the word stream.
    TogglePause,
    /// Key has no binding.
    Ignored,
}

/// Map a key event to a reader command.
pub fn command_for(key: &KeyEvent) -> ReaderCommand {
    if key.kind == KeyEventKind::Release {
        return ReaderCommand::Ignored;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => ReaderCommand::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => ReaderCommand::Quit,
        KeyCode::Char(' ' | 'p') => ReaderCommand::TogglePause,
        _ => ReaderCommand::Ignored,
    }
}

/// Source of key presses.
pub trait KeySource {
    /// Wait up to `timeout` for a key press.
    ///
    /// Returns `None` when the timeout elapses without one.
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Reads keys from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Replays a fixed sequence of keys, one per call; `None` entries stand for
/// timeouts. Once exhausted it keeps answering `Esc` so loops terminate.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Option<KeyEvent>>,
}

impl ScriptedKeys {
    /// Create a source from a key script.
    pub fn new(keys: impl IntoIterator<Item = Option<KeyEvent>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// A script that never presses anything until it runs dry.
    pub fn timeouts(count: usize) -> Self {
        Self::new(vec![None; count])
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
        Ok(self
            .keys
            .pop_front()
            .unwrap_or_else(|| Some(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))))
    }
}
