//! Error types for the statistics reporter.

use thiserror::Error;

/// Result type for report runs.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised while building a report.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A report was asked for with zero iterations.
    #[error("a report needs at least one iteration")]
    NoIterations,

    /// A draw inside the loop failed.
    #[error(transparent)]
    Draw(#[from] tj_draw::DrawError),

    /// The deck could not form fortune hands.
    #[error(transparent)]
    Deck(#[from] tj_deck::DeckError),
}
