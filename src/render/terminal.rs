use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use crate::constants::terminal::FALLBACK_COLUMNS;
use crate::error::Result;
use crate::orp::{format_for_speed_reading, RenderDescriptor};
use crate::style::{highlight_fixation, HighlightStyle};

/// Center a formatted word in `columns`, highlighting its fixation character.
///
/// Only visible characters count toward the width; the escape codes added by
/// the highlight do not.
pub fn centered_line(descriptor: &RenderDescriptor, columns: u16, style: &HighlightStyle) -> String {
    let width = descriptor.padded_text().width();
    let left = usize::from(columns).saturating_sub(width) / 2;
    format!("{}{}", " ".repeat(left), highlight_fixation(descriptor, style))
}

/// Prints one word at a time, clearing the screen in between.
pub struct TerminalRenderer<W: Write> {
    out: W,
    style: HighlightStyle,
    delay: Duration,
    shown: usize,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out`.
    pub const fn new(out: W, style: HighlightStyle, delay: Duration) -> Self {
        Self { out, style, delay, shown: 0 }
    }

    /// Show every word in turn and return how many were displayed.
    ///
    /// Words the formatter rejects are skipped. Ctrl+C stops the run early.
    pub async fn render(&mut self, words: &[String]) -> Result<usize> {
        self.render_until(words, tokio::signal::ctrl_c()).await
    }

    /// Like [`render`](Self::render), but stops as soon as `interrupt`
    /// completes. The cursor is restored either way.
    pub async fn render_until<F: Future>(&mut self, words: &[String], interrupt: F) -> Result<usize> {
        self.shown = 0;
        execute!(self.out, Hide)?;

        let result = tokio::select! {
            biased;
            _ = interrupt => {
                tracing::info!("Interrupted after {} words", self.shown);
                self.clear().map(|()| self.shown)
            }
            r = self.render_words(words) => r,
        };

        execute!(self.out, Show)?;
        result
    }

    async fn render_words(&mut self, words: &[String]) -> Result<usize> {
        self.clear()?;

        for word in words {
            let descriptor = match format_for_speed_reading(word) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Skipping word #{}: {e}", self.shown);
                    continue;
                }
            };

            self.print_word(&descriptor)?;
            self.shown += 1;
            tokio::time::sleep(self.delay).await;
            self.clear()?;
        }

        tracing::debug!("Displayed {} of {} words", self.shown, words.len());
        Ok(self.shown)
    }

    fn print_word(&mut self, descriptor: &RenderDescriptor) -> Result<()> {
        let (columns, rows) = terminal::size().unwrap_or((FALLBACK_COLUMNS, 1));
        let line = centered_line(descriptor, columns, &self.style);
        queue!(self.out, MoveTo(0, rows / 2), Print(line))?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Consume the renderer and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
