//! Aggregate statistics for Tianji.
//!
//! Wraps the draw and scoring pipeline in a loop and summarises what comes
//! out: per-card frequencies and their uniformity, category balance against
//! what a mode should produce, and the distribution of fortune levels and
//! scores. Reports never feed back into single draws.

pub mod distribution;
pub mod error;
pub mod mode_report;
pub mod summary;
pub mod uniformity;

pub use distribution::{
    Coverage, EVEN_LEVEL_SHARE, FortuneDistribution, LevelStats, exhaustive_distribution,
    sampled_distribution,
};
pub use error::{StatsError, StatsResult};
pub use mode_report::{
    CardCount, DEFAULT_ITERATIONS, ModeReport, ReportTarget, TOP_CARDS, run_mode_report,
};
pub use summary::ScoreSummary;
pub use uniformity::{
    BalanceRating, CategoryBalance, UniformityRating, coefficient_of_variation,
};
