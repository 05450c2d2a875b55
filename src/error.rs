//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

use crate::orp::EmptyWordError;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error; file errors come from `fs_err` and already name the path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Article endpoint error with status context
    #[error("Article fetch error: {message}")]
    Article {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Payload parsing error
    #[error("Parse error in {source_name}: {message}")]
    Parse {
        /// Where the unparseable data came from (URL or file).
        source_name: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A word handed to the formatter was empty
    #[error(transparent)]
    EmptyWord(#[from] EmptyWordError),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an article error with HTTP status and a matching hint
    pub fn article_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 | 403 => Some("The article endpoint refused access - check the URL"),
            404 => Some("The requested article was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Article server error - try again later"),
            _ => None,
        };
        Self::Article {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error naming the data source
    pub fn parse(message: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::Parse { source_name: source_name.into(), message: message.into() }
    }

    /// Actionable hint attached to this error, if any
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Article { hint, .. } => *hint,
            Self::Config { hint, .. } => Some(*hint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn article_status_provides_hints() {
        let err = Error::article_status("Not Found", 404);
        match err {
            Error::Article { hint: Some(h), status: Some(404), .. } => {
                assert!(h.contains("not found"));
            }
            _ => panic!("Expected Article error with hint"),
        }
    }

    #[test]
    fn article_status_without_hint() {
        let err = Error::article_status("I'm a teapot", 418);
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn empty_word_converts() {
        let err: Error = EmptyWordError.into();
        assert_eq!(err.to_string(), "input word cannot be empty");
    }

    #[test]
    fn io_error_names_path_once() {
        let source = fs_err::read_to_string("/definitely/not/here.txt").unwrap_err();
        let message = Error::from(source).to_string();
        assert!(message.starts_with("IO error: "));
        assert_eq!(message.matches("/definitely/not/here.txt").count(), 1);
        assert!(!message.contains("None"));
    }

    #[test]
    fn config_error_includes_hint_in_message() {
        let err = Error::config("bad delay", "Use a whole number of milliseconds");
        assert!(err.to_string().contains("whole number"));
        assert_eq!(err.hint(), Some("Use a whole number of milliseconds"));
    }
}
