//! Readings for situational draws: local metrics, pattern detection,
//! per-profile wording and the four-gauge summary.

pub mod compose;
pub mod lexicon;
pub mod metrics;
pub mod summary;

pub use compose::{
    MAX_ADVICE, MAX_FALLBACK_INSIGHTS, MAX_INSIGHTS, SituationReading,
    generate_situation_interpretation,
};
pub use lexicon::{Cue, LEXICONS, Lexicon, lexicon_for};
pub use metrics::{OverallState, Pattern, SituationMetrics, detect_patterns};
pub use summary::{Gauge, SituationSummary, generate_situation_summary};
