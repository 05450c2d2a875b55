//! Renderers that print formatted words to the terminal.

mod terminal;

pub use terminal::{centered_line, TerminalRenderer};
