//! Error types for the draw engine.

use thiserror::Error;

use tj_deck::Category;

/// Result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors raised by a draw.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The filtered candidate pool had no cards.
    #[error("no cards available{}", pool_suffix(.0))]
    EmptyPool(Option<Category>),

    /// The deck holds fewer distinct cards than the draw asked for.
    #[error("requested {requested} cards but the deck only has {available}")]
    InsufficientDeck {
        /// Cards requested.
        requested: usize,
        /// Cards available.
        available: usize,
    },

    /// Caller passed a malformed request.
    #[error("invalid draw request: {0}")]
    Validation(String),

    /// Catalog error surfaced during a draw.
    #[error(transparent)]
    Deck(#[from] tj_deck::DeckError),
}

fn pool_suffix(category: &Option<Category>) -> String {
    match category {
        Some(c) => format!(" in category {c}"),
        None => String::new(),
    }
}
