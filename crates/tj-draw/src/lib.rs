//! Weighted draw engine for the Tianji deck.
//!
//! Single and fortune draws are uniform within a category so the base game
//! stays fair. Situational draws score every card against a context profile
//! and sample by relevance while steering the category mix toward the
//! profile's weights.

pub mod error;
pub mod mode;
pub mod relevance;
pub mod single;
pub mod situational;

pub use error::{DrawError, DrawResult};
pub use mode::DrawMode;
pub use relevance::{KeywordMatch, RelevanceScorer, ScoringMode};
pub use single::{draw_fortune_set, draw_single};
pub use situational::{SituationalOptions, category_targets, draw_situational};
