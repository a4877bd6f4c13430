//! Error types for the session facade.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Catalog loading or validation failed.
    #[error(transparent)]
    Deck(#[from] tj_deck::DeckError),

    /// A draw failed.
    #[error(transparent)]
    Draw(#[from] tj_draw::DrawError),

    /// A reading could not be composed.
    #[error(transparent)]
    Reading(#[from] tj_reading::ReadingError),

    /// A statistics run failed.
    #[error(transparent)]
    Stats(#[from] tj_stats::StatsError),

    /// The history store could not be written.
    #[error("history store: {0}")]
    Store(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Store(err.to_string())
    }
}
