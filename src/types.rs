//! Core type definitions shared by the CLI and the renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the words are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Print each word centered in the terminal, clearing between words.
    Terminal,
    /// Full-screen reader window with fixation markers.
    #[default]
    Ui,
}

impl OutputType {
    /// Returns the human-readable name of this output type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Ui => "ui",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "ui" => Ok(Self::Ui),
            other => Err(format!("unknown output type '{other}'")),
        }
    }
}

/// Where the article text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// JSON article endpoint with an HTML `body` field.
    Url(String),
    /// Local text or HTML file.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
