//! Error types for starting the slideshow.
//!
//! Navigation itself never fails: every index wraps into range. Only
//! startup (reading the deck, reading settings, launching the window)
//! can go wrong.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up the presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// The deck contains no slides, so there is nothing to navigate.
    #[error("Deck has no slides")]
    NoSlides,

    /// The deck document could not be parsed.
    #[error("Invalid deck: {0}")]
    Deck(#[source] serde_json::Error),

    /// The settings file exists but could not be read.
    #[error("Failed to read settings: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// The settings file is not valid JSON for `Settings`.
    #[error("Invalid settings: {0}")]
    Settings(#[source] serde_json::Error),

    /// The window or renderer failed.
    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}
