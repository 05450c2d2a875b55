//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Article source constants.
pub mod article {
    /// Article fetched when no URL is configured.
    pub const DEFAULT_URL: &str = "https://editorial.digitalcontent.sky/articles/12905218.json";

    /// HTTP request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Reading pace constants.
pub mod pacing {
    /// Default pause between words in milliseconds.
    pub const DEFAULT_DELAY_MS: u64 = 100;

    /// Smallest accepted pause; anything lower just flickers.
    pub const MIN_DELAY_MS: u64 = 10;
}

/// Terminal renderer constants.
pub mod terminal {
    /// Column count used when the terminal size cannot be detected.
    pub const FALLBACK_COLUMNS: u16 = 80;
}

/// Reader window constants.
pub mod window {
    /// Width of the word panel in characters.
    pub const PANEL_WIDTH: u16 = 50;

    /// Height of the word panel including borders.
    pub const PANEL_HEIGHT: u16 = 7;

    /// Marker drawn above and below the fixation column.
    pub const MARKER: &str = "|";

    /// Event poll interval while waiting for the user to quit.
    pub const IDLE_POLL_MS: u64 = 50;
}
