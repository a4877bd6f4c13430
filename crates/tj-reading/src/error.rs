//! Error types for the interpretation synthesizer.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors raised while composing a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A situational reading was asked for with no cards.
    #[error("cannot interpret an empty draw")]
    EmptyDraw,

    /// The cards do not form a valid hand.
    #[error(transparent)]
    Deck(#[from] tj_deck::DeckError),
}
