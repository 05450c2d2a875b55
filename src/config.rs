//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command-line flags are applied on top with [`Config::apply_overrides`].

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{article, pacing};
use crate::error::{Error, Result};
use crate::style::{HighlightColor, HighlightStyle};
use crate::types::OutputType;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Article JSON endpoint
    pub article_url: String,
    /// Pause between words
    pub delay: Duration,
    /// Highlight applied to the fixation character
    pub style: HighlightStyle,
    /// Renderer to use
    pub output_type: OutputType,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            article_url: article::DEFAULT_URL.to_string(),
            delay: Duration::from_millis(pacing::DEFAULT_DELAY_MS),
            style: HighlightStyle::default(),
            output_type: OutputType::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; malformed ones are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SPEEDREAD_ARTICLE_URL").filter(|u| !u.trim().is_empty()) {
            config.article_url = url.trim().to_string();
        }

        if let Some(ms) = lookup("SPEEDREAD_DELAY_MS") {
            let ms = ms.trim().parse::<u64>().map_err(|_| {
                Error::config(
                    format!("SPEEDREAD_DELAY_MS is not a number: '{ms}'"),
                    "Use a whole number of milliseconds, e.g. 150",
                )
            })?;
            config.set_delay_ms(ms)?;
        }

        if let Some(color) = lookup("SPEEDREAD_COLOR") {
            let color = color.parse::<HighlightColor>().map_err(|e| {
                Error::config(e, "Use one of red, green, yellow, blue, magenta, cyan, white")
            })?;
            config.style.color = color;
        }

        if let Some(output) = lookup("SPEEDREAD_OUTPUT") {
            config.output_type = output
                .parse::<OutputType>()
                .map_err(|e| Error::config(e, "Use 'terminal' or 'ui'"))?;
        }

        tracing::debug!(
            url = %config.article_url,
            delay = ?config.delay,
            output = %config.output_type,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Apply command-line flags, which take priority over the environment.
    pub fn apply_overrides(
        &mut self,
        output_type: Option<OutputType>,
        url: Option<&str>,
        delay_ms: Option<u64>,
        color: Option<HighlightColor>,
    ) -> Result<()> {
        if let Some(output) = output_type {
            self.output_type = output;
        }
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.article_url = url.trim().to_string();
        }
        if let Some(ms) = delay_ms {
            self.set_delay_ms(ms)?;
        }
        if let Some(color) = color {
            self.style.color = color;
        }
        Ok(())
    }

    /// Set the per-word pause, rejecting values too small to read.
    pub fn set_delay_ms(&mut self, ms: u64) -> Result<()> {
        if ms < pacing::MIN_DELAY_MS {
            return Err(Error::config(
                format!("delay of {ms}ms is too short"),
                "Use at least 10 milliseconds per word",
            ));
        }
        self.delay = Duration::from_millis(ms);
        Ok(())
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
