//! Error types for deck construction and navigation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or navigating a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// A slide index outside `[0, len)` was requested.
    #[error("Slide index {index} is out of range (deck has {len} slides)")]
    OutOfRange { index: usize, len: usize },

    /// No slide in the deck has the requested id.
    #[error("No slide with id '{0}'")]
    UnknownSlide(String),

    /// A deck must contain at least one slide.
    #[error("Deck contains no slides")]
    EmptyDeck,

    /// The deck definition violates an invariant (e.g. duplicate slide ids).
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Failed to open or read a deck file.
    #[error("Failed to read deck file: {0}")]
    IoError(#[from] std::io::Error),

    /// The deck file is not valid JSON or does not match the deck format.
    #[error("Deck JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
