//! Error types for catalog loading and hand validation.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors raised while loading catalogs or validating drawn cards.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A catalog violates one of its invariants. Fatal at load time.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Caller passed malformed input (wrong arity, wrong categories).
    #[error("invalid input: {0}")]
    Validation(String),

    /// No context profile with this id.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// Catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}
